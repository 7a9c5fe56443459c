//! # Player Motion Model
//!
//! Normalized directional movement for the world-map player: four held keys
//! become a unit (or zero) direction vector, positions scale with `dt`, and
//! the bounding box is clamped to the map on every step.

use crate::game::{derive_facing, Facing, SpriteVariant, WorldRect};
use serde::{Deserialize, Serialize};

/// Per-axis key-held state for one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// No keys held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Raw per-axis deltas in {-1, 0, 1}, opposing keys cancelling out.
    pub fn axis_deltas(&self) -> (f32, f32) {
        let dx = (self.right as i8 - self.left as i8) as f32;
        let dy = (self.down as i8 - self.up as i8) as f32;
        (dx, dy)
    }

    /// The movement direction as a zero or unit vector.
    ///
    /// Diagonal input is normalized so diagonal speed equals axial speed.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_escape::MoveIntent;
    ///
    /// let intent = MoveIntent { right: true, down: true, ..Default::default() };
    /// let (dx, dy) = intent.direction();
    /// assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < 1e-6);
    /// ```
    pub fn direction(&self) -> (f32, f32) {
        let (dx, dy) = self.axis_deltas();
        if dx != 0.0 || dy != 0.0 {
            let length = (dx * dx + dy * dy).sqrt();
            (dx / length, dy / length)
        } else {
            (0.0, 0.0)
        }
    }
}

/// The world-map player: bounding box, speed and sprite-facing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// World-space bounding box
    pub rect: WorldRect,
    /// Horizontal facing, persists across stops and vertical movement
    pub facing: Facing,
    /// Current sprite variant, derived each tick
    pub sprite: SpriteVariant,
    speed: f32,
}

impl Player {
    /// Creates a player at the given top-left spawn position.
    pub fn new(x: f32, y: f32, size: f32, speed: f32) -> Self {
        Self {
            rect: WorldRect::new(x, y, size, size),
            facing: Facing::Right,
            sprite: SpriteVariant::Idle,
            speed,
        }
    }

    /// Advances the player one tick: move by the normalized intent scaled
    /// with `speed * dt`, clamp into the map, and re-derive facing/sprite.
    pub fn update(&mut self, intent: MoveIntent, dt: f32, map_w: f32, map_h: f32) {
        let (dx, dy) = intent.direction();

        let (facing, sprite) = derive_facing(self.facing, dx, dy);
        self.facing = facing;
        self.sprite = sprite;

        self.rect.x += dx * self.speed * dt;
        self.rect.y += dy * self.speed * dt;
        self.rect.clamp_to_bounds(map_w, map_h);
    }
}
