//! # Dialogue Prompts
//!
//! The entry prompt shown when the player walks onto a building, plus the
//! shared typewriter-style text reveal used by prompts and the intro scene.
//! Drawing lives in the rendering layer; this module only tracks state.

use serde::{Deserialize, Serialize};

/// A string revealed one character at a time at a fixed rate.
///
/// Counts characters, not bytes, so Korean text reveals one syllable block
/// per step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingText {
    full: String,
    visible: usize,
    chars_per_sec: f32,
    accum: f32,
}

impl TypingText {
    /// Starts a fresh reveal of `text` at `chars_per_sec`.
    pub fn new(text: &str, chars_per_sec: f32) -> Self {
        Self {
            full: text.to_string(),
            visible: 0,
            chars_per_sec,
            accum: 0.0,
        }
    }

    /// Advances the reveal by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.finished() {
            return;
        }
        let total = self.full.chars().count();
        self.accum += dt;
        let step = 1.0 / self.chars_per_sec;
        while self.accum >= step && self.visible < total {
            self.accum -= step;
            self.visible += 1;
        }
    }

    /// The currently revealed prefix.
    pub fn text(&self) -> String {
        self.full.chars().take(self.visible).collect()
    }

    /// The complete string being revealed.
    pub fn full_text(&self) -> &str {
        &self.full
    }

    /// Whether every character has been revealed.
    pub fn finished(&self) -> bool {
        self.visible >= self.full.chars().count()
    }

    /// Reveals the remainder immediately.
    pub fn skip(&mut self) {
        self.visible = self.full.chars().count();
    }
}

/// The "enter this building?" prompt, with its typing effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialoguePrompt {
    building: String,
    typing: TypingText,
}

/// Reveal rate of the prompt question.
const PROMPT_CHARS_PER_SEC: f32 = 30.0;

impl DialoguePrompt {
    /// Opens a prompt for the given building.
    pub fn new(building: &str) -> Self {
        let question = format!("{building}에 입장하시겠습니까?");
        Self {
            building: building.to_string(),
            typing: TypingText::new(&question, PROMPT_CHARS_PER_SEC),
        }
    }

    /// The building this prompt was opened for.
    pub fn building(&self) -> &str {
        &self.building
    }

    /// Advances the typing effect.
    pub fn update(&mut self, dt: f32) {
        self.typing.update(dt);
    }

    /// The revealed portion of the question.
    pub fn text(&self) -> String {
        self.typing.text()
    }

    /// Whether the question is fully revealed.
    pub fn finished(&self) -> bool {
        self.typing.finished()
    }

    /// The fixed choice lines shown under the question.
    pub fn choices() -> [&'static str; 2] {
        [
            "1 : 입장하겠습니다.",
            "2 : 입장하지 않고 더 살펴보겠습니다.",
        ]
    }
}
