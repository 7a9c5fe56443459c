//! # Encounter Engine
//!
//! The self-contained chase simulation run inside a building: a zombie
//! pursues the player with sign-based per-axis steps, collisions cost health
//! and respawn the pursuer, and the encounter resolves when the player
//! leaves or health reaches zero.
//!
//! The engine is polled one tick per frame and reports its progress through
//! [`EncounterTick`]; it never blocks. The feedback pauses after a hit or a
//! death are modeled as timers that gate the simulation, so the screen
//! still visibly freezes without the engine ever stalling a frame.

use crate::game::{derive_facing, Facing, GameConfig, MoveIntent, SpriteVariant, WorldRect};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterEnd {
    /// The player left voluntarily; health carried out unchanged
    Escaped(i32),
    /// Health reached zero; carried-out health is 0
    Died,
}

impl EncounterEnd {
    /// The health value returned to the outer world.
    pub fn health(&self) -> i32 {
        match self {
            EncounterEnd::Escaped(health) => *health,
            EncounterEnd::Died => 0,
        }
    }
}

/// Result of advancing the encounter by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterTick {
    /// Simulation advanced, nothing notable happened
    Running,
    /// The pursuer connected this tick; `remaining` is the health left
    /// (0 on a fatal hit, in which case the death pause follows)
    Hit { remaining: i32 },
    /// The encounter is over; the mode machine takes the result
    Done(EncounterEnd),
}

/// Feedback pause gating the simulation after a collision.
#[derive(Debug, Clone, Copy)]
enum Pause {
    Hit(f32),
    Death(f32),
}

/// One building's chase simulation.
///
/// Owns its own player representation (re-centered at entry) and pursuer;
/// the outer world is fully suspended while this runs and only receives the
/// final health back.
#[derive(Debug)]
pub struct Encounter {
    building: String,
    /// Player bounding box in encounter screen space
    pub player: WorldRect,
    /// Pursuer bounding box in encounter screen space
    pub pursuer: WorldRect,
    /// Player facing for sprite selection
    pub facing: Facing,
    /// Player sprite variant for this tick
    pub sprite: SpriteVariant,
    health: i32,
    elapsed: f32,
    screen_w: f32,
    screen_h: f32,
    config: GameConfig,
    rng: StdRng,
    pause: Option<Pause>,
}

impl Encounter {
    /// Starts an encounter for `building`, carrying in the current health.
    ///
    /// The player is re-centered on the encounter screen; the pursuer spawns
    /// uniformly at random within the screen minus its own size.
    pub fn new(
        building: &str,
        health: i32,
        screen_w: f32,
        screen_h: f32,
        config: &GameConfig,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let player_size = config.encounter_player_size;
        let pursuer_size = config.pursuer_size;

        let mut player = WorldRect::new(0.0, 0.0, player_size, player_size);
        player.set_center(crate::game::WorldPoint::new(screen_w / 2.0, screen_h / 2.0));

        let pursuer = WorldRect::new(
            rng.gen_range(0.0..=(screen_w - pursuer_size).max(0.0)),
            rng.gen_range(0.0..=(screen_h - pursuer_size).max(0.0)),
            pursuer_size,
            pursuer_size,
        );

        Self {
            building: building.to_string(),
            player,
            pursuer,
            facing: Facing::Right,
            sprite: SpriteVariant::Idle,
            health,
            elapsed: 0.0,
            screen_w,
            screen_h,
            config: config.clone(),
            rng,
            pause: None,
        }
    }

    /// The building this encounter belongs to.
    pub fn building(&self) -> &str {
        &self.building
    }

    /// Current health inside the encounter.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Whole seconds since the encounter started, for display only.
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed as u32
    }

    /// Whether the transient damage indicator should be drawn.
    pub fn showing_hit_flash(&self) -> bool {
        matches!(self.pause, Some(Pause::Hit(_)))
    }

    /// Whether the terminal death banner should be drawn.
    pub fn showing_death_banner(&self) -> bool {
        matches!(self.pause, Some(Pause::Death(_)))
    }

    /// Advances the encounter by one tick.
    ///
    /// `cancel` is the discrete leave input (returns the current health
    /// unchanged). Movement uses fixed per-frame steps; `dt` only drives
    /// the elapsed display and the feedback pause timers.
    pub fn tick(&mut self, intent: MoveIntent, cancel: bool, dt: f32) -> EncounterTick {
        self.elapsed += dt;

        // A feedback pause freezes the simulation until its timer runs out.
        if let Some(pause) = self.pause {
            return match pause {
                Pause::Hit(remaining) => {
                    if remaining - dt <= 0.0 {
                        self.pause = None;
                    } else {
                        self.pause = Some(Pause::Hit(remaining - dt));
                    }
                    EncounterTick::Running
                }
                Pause::Death(remaining) => {
                    if remaining - dt <= 0.0 {
                        EncounterTick::Done(EncounterEnd::Died)
                    } else {
                        self.pause = Some(Pause::Death(remaining - dt));
                        EncounterTick::Running
                    }
                }
            };
        }

        // A dead player cannot start fighting.
        if self.health <= 0 {
            return EncounterTick::Done(EncounterEnd::Died);
        }

        if cancel {
            return EncounterTick::Done(EncounterEnd::Escaped(self.health));
        }

        self.step_player(intent);
        self.step_pursuer();

        if self.player.overlaps(&self.pursuer) {
            self.health -= self.config.damage_per_hit;
            if self.health > 0 {
                debug!(
                    "encounter hit in {}: health now {}",
                    self.building, self.health
                );
                self.respawn_pursuer();
                self.pause = Some(Pause::Hit(self.config.hit_pause_secs));
            } else {
                self.health = 0;
                debug!("fatal hit in {}", self.building);
                self.pause = Some(Pause::Death(self.config.death_pause_secs));
            }
            return EncounterTick::Hit {
                remaining: self.health,
            };
        }

        EncounterTick::Running
    }

    /// Moves the player by raw per-axis steps and clamps to the screen.
    ///
    /// Unlike the world map there is no diagonal normalization here;
    /// diagonal movement is a full step on each axis.
    fn step_player(&mut self, intent: MoveIntent) {
        let (dx, dy) = intent.axis_deltas();

        let (facing, sprite) = derive_facing(self.facing, dx, dy);
        self.facing = facing;
        self.sprite = sprite;

        self.player.x += dx * self.config.encounter_player_step;
        self.player.y += dy * self.config.encounter_player_step;
        self.player.clamp_to_bounds(self.screen_w, self.screen_h);
    }

    /// Taxicab pursuit: one sign-based step per axis toward the player.
    ///
    /// Not normalized, and the pursuer never idles; at equal coordinates it
    /// overshoots and oscillates around the player.
    fn step_pursuer(&mut self) {
        let step = self.config.encounter_pursuer_step;
        if self.pursuer.x < self.player.x {
            self.pursuer.x += step;
        } else {
            self.pursuer.x -= step;
        }
        if self.pursuer.y < self.player.y {
            self.pursuer.y += step;
        } else {
            self.pursuer.y -= step;
        }
    }

    /// Repositions the pursuer uniformly at random within the screen.
    fn respawn_pursuer(&mut self) {
        let size = self.config.pursuer_size;
        self.pursuer.x = self.rng.gen_range(0.0..=(self.screen_w - size).max(0.0));
        self.pursuer.y = self.rng.gen_range(0.0..=(self.screen_h - size).max(0.0));
    }
}
