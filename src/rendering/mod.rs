//! # Rendering Module
//!
//! macroquad display management: asset loading and all drawing for the
//! world map, minimap, dialogue box, encounter screen and intro.

pub mod display;
pub mod ui;

pub use display::*;
