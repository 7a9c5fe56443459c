//! # Scene Management
//!
//! The frame-stepped driver: an intro scene with the typed warning text,
//! then the world scene, which advances the mode machine every tick and
//! renders whichever mode is active. One logical tick is one rendered
//! frame; `dt` is the measured time since the previous frame.

use crate::game::{
    BuildingIndex, Camera, Choice, GameConfig, Minimap, Mode, ModeMachine, Player, TypingText,
};
use crate::input::{InputHandler, PlayerInput};
use crate::rendering::Display;
use crate::CampusResult;
use log::info;
use macroquad::prelude::{get_frame_time, next_frame};

/// Seconds the intro background shows before typing starts.
const INTRO_DELAY_SECS: f32 = 1.2;

/// Intro typing speed, deliberately slow.
const INTRO_CHARS_PER_SEC: f32 = 12.0;

/// Which top-level scene is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// The typed intro before the world opens
    Intro,
    /// World exploration with the mode machine running
    Playing,
}

/// The intro sequence: a still background delay, then each line revealed
/// with the typing effect, one after another.
#[derive(Debug)]
pub struct IntroScene {
    lines: Vec<String>,
    current: usize,
    typing: TypingText,
    delay_timer: f32,
    delay_done: bool,
    finished: bool,
}

impl IntroScene {
    /// The intro with the game's standard warning text.
    pub fn new() -> Self {
        Self::with_lines(vec![
            "좀비에 감염된 연세대학교에 입장하시겠습니까?".to_string(),
            "주의: 신중히 생각하세요.\n한 번 입장하시면 탈출키를 찾아 탈출구로 나가기 전까지 게임을 종료하실 수 없습니다.\n좀비들을 피해 아이템을 획득하고 탈출키를 찾아 살아 나오시길 바라겠습니다.".to_string(),
            "행운을 빕니다. GOOD LUCK".to_string(),
        ])
    }

    /// An intro over arbitrary lines.
    pub fn with_lines(lines: Vec<String>) -> Self {
        let typing = TypingText::new(&lines[0], INTRO_CHARS_PER_SEC);
        Self {
            lines,
            current: 0,
            typing,
            delay_timer: 0.0,
            delay_done: false,
            finished: false,
        }
    }

    /// Advances the delay and typing; lines auto-advance as each completes.
    pub fn update(&mut self, dt: f32) {
        if !self.delay_done {
            self.delay_timer += dt;
            if self.delay_timer >= INTRO_DELAY_SECS {
                self.delay_done = true;
            }
            return;
        }
        if self.finished {
            return;
        }

        self.typing.update(dt);
        if self.typing.finished() {
            if self.current == self.lines.len() - 1 {
                self.finished = true;
            } else {
                self.current += 1;
                self.typing = TypingText::new(&self.lines[self.current], INTRO_CHARS_PER_SEC);
            }
        }
    }

    /// Whether the still-background delay has elapsed.
    pub fn show_text(&self) -> bool {
        self.delay_done
    }

    /// Whether every line is fully revealed.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// The lines to render this frame: all completed lines plus the partial
    /// current one, each tagged with its source line index.
    pub fn visible_lines(&self) -> Vec<(String, usize)> {
        let mut lines: Vec<(String, usize)> = self
            .lines
            .iter()
            .take(self.current)
            .cloned()
            .enumerate()
            .map(|(i, l)| (l, i))
            .collect();
        let partial = self.typing.text();
        if !partial.is_empty() {
            lines.push((partial, self.current));
        }
        lines
    }
}

impl Default for IntroScene {
    fn default() -> Self {
        Self::new()
    }
}

/// The main scene manager coordinating the intro and world scenes.
pub struct SceneManager {
    scene: SceneType,
    intro: IntroScene,
    config: GameConfig,
    machine: ModeMachine,
    player: Player,
    camera: Camera,
    buildings: BuildingIndex,
    minimap: Minimap,
    display: Display,
    input: InputHandler,
    map_w: f32,
    map_h: f32,
    encounter_seed: u64,
}

impl SceneManager {
    /// Creates the scene manager: loads assets, then builds the world
    /// systems around the loaded map's dimensions.
    pub async fn new(config: GameConfig, seed: u64) -> CampusResult<Self> {
        config.validate()?;
        let display = Display::new().await?;
        let (map_w, map_h) = display.map_size();

        let player = Player::new(400.0, 400.0, config.player_size, config.player_speed);
        let mut camera = Camera::new(
            display.screen_w,
            display.screen_h,
            config.zoom,
            map_w,
            map_h,
        );
        camera.set_tracked_center(player.rect.center());
        let minimap = Minimap::top_right(display.screen_w, map_w, map_h, config.minimap_scale);

        info!("world ready: {map_w}x{map_h} map, seed {seed}");

        Ok(Self {
            scene: SceneType::Intro,
            intro: IntroScene::new(),
            machine: ModeMachine::new(config.clone()),
            player,
            camera,
            buildings: BuildingIndex::campus(),
            minimap,
            display,
            input: InputHandler::new(),
            map_w,
            map_h,
            encounter_seed: seed,
            config,
        })
    }

    /// Runs the scene loop until the player quits.
    pub async fn run(&mut self) -> CampusResult<()> {
        loop {
            let dt = get_frame_time();
            let quit = match self.scene {
                SceneType::Intro => self.update_intro(dt),
                SceneType::Playing => self.update_playing(dt),
            };
            if quit {
                break;
            }
            next_frame().await;
        }
        info!("game loop ended");
        Ok(())
    }

    /// Advances and renders the intro; Enter starts the game once the text
    /// has finished typing.
    fn update_intro(&mut self, dt: f32) -> bool {
        self.intro.update(dt);

        if self.intro.finished() && self.input.poll_event() == Some(PlayerInput::Confirm) {
            info!("intro finished, entering the world");
            self.scene = SceneType::Playing;
            return false;
        }

        self.display.draw_intro(
            &self.intro.visible_lines(),
            self.intro.show_text(),
            self.intro.finished(),
        );
        false
    }

    /// Advances the world by one tick and renders the active mode.
    /// Returns true when the player quits.
    fn update_playing(&mut self, dt: f32) -> bool {
        let intent = self.input.move_intent();
        let event = self.input.poll_event();

        if matches!(self.machine.mode(), Mode::Exploration) {
            if event == Some(PlayerInput::Leave) {
                info!("player quit the game");
                return true;
            }
            self.player.update(intent, dt, self.map_w, self.map_h);
            self.camera.set_tracked_center(self.player.rect.center());
            let hit = self.buildings.query(&self.player.rect);
            self.machine.observe_proximity(hit);
        } else if matches!(self.machine.mode(), Mode::Dialogue(_)) {
            // Player and camera stay frozen while the prompt is open.
            self.machine.update_dialogue(dt);
            match event {
                Some(PlayerInput::Confirm) => {
                    let seed = self.next_encounter_seed();
                    self.machine.choose(
                        Choice::Enter,
                        self.display.screen_w,
                        self.display.screen_h,
                        seed,
                    );
                }
                Some(PlayerInput::Cancel) => {
                    self.machine.choose(Choice::Cancel, 0.0, 0.0, 0);
                }
                _ => {}
            }
        } else {
            let cancel = event == Some(PlayerInput::Leave);
            self.machine.tick_encounter(intent, cancel, dt);
        }

        match self.machine.mode() {
            Mode::Encounter(encounter) => {
                self.display.draw_encounter(encounter, self.config.max_health);
            }
            mode => {
                self.display.draw_world(
                    &self.player,
                    &self.camera,
                    &self.minimap,
                    self.machine.health(),
                    self.config.max_health,
                );
                if let Mode::Dialogue(prompt) = mode {
                    self.display.draw_dialogue(prompt);
                }
            }
        }
        false
    }

    /// A distinct seed per encounter so pursuer placement varies.
    fn next_encounter_seed(&mut self) -> u64 {
        self.encounter_seed = self.encounter_seed.wrapping_add(1);
        self.encounter_seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_delay_before_typing() {
        let mut intro = IntroScene::with_lines(vec!["ab".to_string()]);
        intro.update(0.5);
        assert!(!intro.show_text());
        assert!(intro.visible_lines().is_empty());

        intro.update(1.0);
        assert!(intro.show_text());
    }

    #[test]
    fn test_intro_lines_advance_and_finish() {
        let mut intro = IntroScene::with_lines(vec!["ab".to_string(), "cd".to_string()]);
        intro.update(INTRO_DELAY_SECS);

        // First line types out, then the second.
        intro.update(2.0 / INTRO_CHARS_PER_SEC);
        assert!(!intro.finished());
        intro.update(1.0);
        intro.update(1.0);
        assert!(intro.finished());

        let lines = intro.visible_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ("ab".to_string(), 0));
        assert_eq!(lines[1], ("cd".to_string(), 1));
    }
}
