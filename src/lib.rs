//! # Campus Escape
//!
//! A top-down 2D exploration game: the player roams a scrollable campus map
//! behind a zoomed camera, gets prompted when walking onto a building, and can
//! enter building-specific survival encounters against a chasing zombie that
//! drains health.
//!
//! ## Architecture Overview
//!
//! The crate is split into a simulation core and thin presentation layers:
//!
//! - **Game core** ([`game`]): geometry, player motion, camera/viewport,
//!   building proximity index, dialogue prompts, the mode state machine and
//!   the per-building encounter engine. No rendering code lives here.
//! - **Input** ([`input`]): translates raw macroquad key state into logical
//!   movement intents and discrete player inputs.
//! - **Rendering** ([`rendering`]): macroquad display management, asset
//!   loading and all drawing (map slice, sprites, minimap, dialogue box,
//!   encounter screen).
//! - **Scenes** ([`scenes`]): the frame-stepped driver coordinating the
//!   intro and world scenes and polling the mode machine every tick.
//!
//! Shared mutable state is limited to player health, which is passed by
//! value into an encounter and returned when the encounter resolves.

pub mod game;
pub mod input;
pub mod rendering;
pub mod scenes;

pub use game::{
    derive_facing, Building, BuildingIndex, Camera, Choice, DialoguePrompt, Encounter,
    EncounterEnd, EncounterTick, Facing, GameConfig, Minimap, Mode, ModeMachine, MoveIntent,
    Player, SpriteVariant, TypingText, WorldPoint, WorldRect,
};
pub use input::{InputHandler, PlayerInput};
pub use rendering::Display;
pub use scenes::{IntroScene, SceneManager, SceneType};

/// Core error type for the Campus Escape game.
#[derive(thiserror::Error, Debug)]
pub enum CampusError {
    /// An image or font asset failed to load; fatal at startup
    #[error("asset load failed: {0}")]
    Asset(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration or game state is invalid
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Campus Escape codebase.
pub type CampusResult<T> = Result<T, CampusError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window and pacing constants.
pub mod config {
    /// Window width in pixels
    pub const SCREEN_WIDTH: i32 = 1200;

    /// Window height in pixels
    pub const SCREEN_HEIGHT: i32 = 800;

    /// Frames per second the simulation is paced at
    pub const TARGET_FPS: u64 = 60;
}
