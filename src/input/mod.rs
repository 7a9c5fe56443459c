//! # Input Module
//!
//! Translates raw macroquad key state into logical inputs: held movement
//! keys become a [`MoveIntent`] snapshot, single-press actions become
//! discrete [`PlayerInput`] events.

use crate::game::MoveIntent;
use macroquad::prelude::*;

/// Discrete single-press player inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Choice 1 in a prompt, or advancing the intro (Enter / 1)
    Confirm,
    /// Choice 2 in a prompt (2)
    Cancel,
    /// Leave the current context (Escape): exits an encounter, quits the
    /// game from the world map
    Leave,
}

/// Input handler polling macroquad key state.
///
/// Movement is sampled as held-key state every tick; discrete actions fire
/// once per key press.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Samples the held movement keys (WASD and arrows).
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        }
    }

    /// Polls for a discrete input this frame, if any.
    pub fn poll_event(&self) -> Option<PlayerInput> {
        if is_key_pressed(KeyCode::Key1) || is_key_pressed(KeyCode::Enter) {
            return Some(PlayerInput::Confirm);
        }
        if is_key_pressed(KeyCode::Key2) {
            return Some(PlayerInput::Cancel);
        }
        if is_key_pressed(KeyCode::Escape) {
            return Some(PlayerInput::Leave);
        }
        None
    }
}
