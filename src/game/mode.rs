//! # Mode State Machine
//!
//! Governs the transitions among exploration, the building entry prompt and
//! the in-building encounter. The machine owns the player's health, which is
//! the only state that survives mode transitions: it is carried into an
//! encounter by value and written back when the encounter resolves.

use crate::game::{
    DialoguePrompt, Encounter, EncounterEnd, EncounterTick, GameConfig, MoveIntent,
};
use log::info;

/// A dialogue choice made while a prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Enter the building, starting an encounter
    Enter,
    /// Stay outside and keep exploring
    Cancel,
}

/// The active game mode. Exactly one is active at any time.
#[derive(Debug)]
pub enum Mode {
    /// Free roaming on the world map
    Exploration,
    /// An entry prompt is open; movement is suppressed
    Dialogue(DialoguePrompt),
    /// An encounter runs; the outer world is fully suspended
    Encounter(Encounter),
}

/// The mode state machine.
///
/// Drives prompt opening from proximity observations, dialogue choices into
/// encounters, and encounter results back into exploration. A cancelled
/// building is remembered so standing on it does not immediately re-prompt;
/// the memory clears once the player steps off.
#[derive(Debug)]
pub struct ModeMachine {
    mode: Mode,
    health: i32,
    last_cancelled: Option<String>,
    config: GameConfig,
}

impl ModeMachine {
    /// Creates a machine in exploration mode at full health.
    pub fn new(config: GameConfig) -> Self {
        Self {
            mode: Mode::Exploration,
            health: config.max_health,
            last_cancelled: None,
            config,
        }
    }

    /// The currently active mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Mutable access to the running encounter, if one is active.
    pub fn encounter_mut(&mut self) -> Option<&mut Encounter> {
        match &mut self.mode {
            Mode::Encounter(encounter) => Some(encounter),
            _ => None,
        }
    }

    /// Current player health, in `[0, max_health]`.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// The building whose prompt was most recently cancelled, if the player
    /// has not left it yet.
    pub fn last_cancelled(&self) -> Option<&str> {
        self.last_cancelled.as_deref()
    }

    /// Whether world-map movement input should be processed this tick.
    pub fn movement_allowed(&self) -> bool {
        matches!(self.mode, Mode::Exploration)
    }

    /// Feeds the proximity query result for this tick.
    ///
    /// Only meaningful during exploration: leaving all buildings clears the
    /// cancel memory; standing on a building other than the one just
    /// cancelled opens its prompt.
    pub fn observe_proximity(&mut self, hit: Option<&str>) {
        if !matches!(self.mode, Mode::Exploration) {
            return;
        }
        match hit {
            None => self.last_cancelled = None,
            Some(building) => {
                if self.last_cancelled.as_deref() != Some(building) {
                    info!("opening entry prompt for {building}");
                    self.mode = Mode::Dialogue(DialoguePrompt::new(building));
                }
            }
        }
    }

    /// Advances the prompt's typing effect, if a prompt is open.
    pub fn update_dialogue(&mut self, dt: f32) {
        if let Mode::Dialogue(prompt) = &mut self.mode {
            prompt.update(dt);
        }
    }

    /// Applies a dialogue choice. Choice input outside an open prompt is
    /// silently ignored.
    ///
    /// Entering spawns the encounter on a `screen_w` x `screen_h` surface
    /// with the pursuer placed from `seed`.
    pub fn choose(&mut self, choice: Choice, screen_w: f32, screen_h: f32, seed: u64) {
        let Mode::Dialogue(prompt) = &self.mode else {
            return;
        };
        let building = prompt.building().to_string();
        match choice {
            Choice::Enter => {
                info!("entering {building} with {} health", self.health);
                self.last_cancelled = None;
                self.mode = Mode::Encounter(Encounter::new(
                    &building,
                    self.health,
                    screen_w,
                    screen_h,
                    &self.config,
                    seed,
                ));
            }
            Choice::Cancel => {
                info!("declined to enter {building}");
                self.last_cancelled = Some(building);
                self.mode = Mode::Exploration;
            }
        }
    }

    /// Polls the running encounter for one tick.
    ///
    /// When the encounter reports done, its health flows back into the
    /// machine (clamped at zero), the cancel memory clears so the prompt can
    /// re-open while the player still stands on the building, and the mode
    /// returns to exploration at the pre-encounter world position.
    ///
    /// Returns `None` when no encounter is active.
    pub fn tick_encounter(
        &mut self,
        intent: MoveIntent,
        cancel: bool,
        dt: f32,
    ) -> Option<EncounterTick> {
        let Mode::Encounter(encounter) = &mut self.mode else {
            return None;
        };
        let tick = encounter.tick(intent, cancel, dt);
        if let EncounterTick::Done(end) = tick {
            match end {
                EncounterEnd::Escaped(health) => {
                    info!("left {} with {health} health", encounter.building());
                }
                EncounterEnd::Died => {
                    info!("died in {}", encounter.building());
                }
            }
            self.health = end.health().clamp(0, self.config.max_health);
            self.last_cancelled = None;
            self.mode = Mode::Exploration;
        }
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1200.0;
    const H: f32 = 800.0;

    fn machine() -> ModeMachine {
        ModeMachine::new(GameConfig::default())
    }

    fn prompt_building(machine: &ModeMachine) -> Option<&str> {
        match machine.mode() {
            Mode::Dialogue(prompt) => Some(prompt.building()),
            _ => None,
        }
    }

    #[test]
    fn test_starts_exploring_at_full_health() {
        let m = machine();
        assert!(matches!(m.mode(), Mode::Exploration));
        assert_eq!(m.health(), 100);
        assert!(m.movement_allowed());
    }

    #[test]
    fn test_proximity_opens_prompt_once() {
        let mut m = machine();
        m.observe_proximity(Some("정의관"));
        assert_eq!(prompt_building(&m), Some("정의관"));
        assert!(!m.movement_allowed());

        // Further observations while the prompt is open change nothing.
        m.observe_proximity(Some("정의관"));
        assert_eq!(prompt_building(&m), Some("정의관"));
    }

    #[test]
    fn test_cancel_suppresses_reprompt_until_leaving() {
        let mut m = machine();
        m.observe_proximity(Some("청송관"));
        m.choose(Choice::Cancel, W, H, 1);
        assert!(matches!(m.mode(), Mode::Exploration));
        assert_eq!(m.last_cancelled(), Some("청송관"));

        // Still standing on the building: no new prompt.
        m.observe_proximity(Some("청송관"));
        assert!(matches!(m.mode(), Mode::Exploration));

        // Stepping off clears the memory; re-entering prompts again.
        m.observe_proximity(None);
        assert_eq!(m.last_cancelled(), None);
        m.observe_proximity(Some("청송관"));
        assert_eq!(prompt_building(&m), Some("청송관"));
    }

    #[test]
    fn test_cancel_of_one_building_does_not_suppress_another() {
        let mut m = machine();
        m.observe_proximity(Some("도서관"));
        m.choose(Choice::Cancel, W, H, 1);
        m.observe_proximity(Some("미래관"));
        assert_eq!(prompt_building(&m), Some("미래관"));
    }

    #[test]
    fn test_enter_starts_encounter_with_current_health() {
        let mut m = machine();
        m.observe_proximity(Some("백운관"));
        m.choose(Choice::Enter, W, H, 42);
        match m.mode() {
            Mode::Encounter(enc) => {
                assert_eq!(enc.building(), "백운관");
                assert_eq!(enc.health(), 100);
            }
            other => panic!("expected encounter, got {other:?}"),
        }
        assert_eq!(m.last_cancelled(), None);
        assert!(!m.movement_allowed());
    }

    #[test]
    fn test_choice_outside_prompt_is_ignored() {
        let mut m = machine();
        m.choose(Choice::Enter, W, H, 1);
        assert!(matches!(m.mode(), Mode::Exploration));
    }

    #[test]
    fn test_voluntary_exit_returns_health_and_resumes() {
        let mut m = machine();
        m.observe_proximity(Some("창조관"));
        m.choose(Choice::Enter, W, H, 3);
        let tick = m.tick_encounter(MoveIntent::none(), true, 0.016);
        assert_eq!(
            tick,
            Some(EncounterTick::Done(EncounterEnd::Escaped(100)))
        );
        assert!(matches!(m.mode(), Mode::Exploration));
        assert_eq!(m.health(), 100);
        assert_eq!(m.last_cancelled(), None);
    }

    #[test]
    fn test_death_returns_zero_health() {
        let mut m = machine();
        m.observe_proximity(Some("학생회관"));
        m.choose(Choice::Enter, W, H, 5);

        // Drive the encounter to a fatal collision by teleporting the
        // pursuer onto the player repeatedly.
        let mut guard = 0;
        loop {
            let enc = m.encounter_mut().expect("encounter active");
            enc.pursuer.x = enc.player.x;
            enc.pursuer.y = enc.player.y;
            let tick = m.tick_encounter(MoveIntent::none(), false, 2.0).unwrap();
            if tick == EncounterTick::Done(EncounterEnd::Died) {
                break;
            }
            guard += 1;
            assert!(guard < 100, "encounter never resolved");
        }

        assert!(matches!(m.mode(), Mode::Exploration));
        assert_eq!(m.health(), 0);
    }

    #[test]
    fn test_proximity_ignored_while_encounter_runs() {
        let mut m = machine();
        m.observe_proximity(Some("도서관"));
        m.choose(Choice::Enter, W, H, 9);
        m.observe_proximity(Some("미래관"));
        assert!(matches!(m.mode(), Mode::Encounter(_)));
    }

    #[test]
    fn test_tick_encounter_outside_encounter_is_none() {
        let mut m = machine();
        assert_eq!(m.tick_encounter(MoveIntent::none(), false, 0.016), None);
    }
}
