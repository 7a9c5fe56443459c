//! # Game Module
//!
//! The simulation core: world geometry, the player motion model, the zoomed
//! camera, the building proximity index, dialogue prompts, the mode state
//! machine and the building encounter engine.
//!
//! Everything in here is rendering-free and driven by plain values, so the
//! whole core can be exercised in tests without a window.

pub mod buildings;
pub mod camera;
pub mod dialogue;
pub mod encounter;
pub mod minimap;
pub mod mode;
pub mod player;

pub use buildings::*;
pub use camera::*;
pub use dialogue::*;
pub use encounter::*;
pub use minimap::*;
pub use mode::*;
pub use player::*;

use crate::{CampusError, CampusResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A point in world space (continuous pixel coordinates over the map image).
///
/// # Examples
///
/// ```
/// use campus_escape::WorldPoint;
///
/// let p = WorldPoint::new(10.0, 5.0);
/// assert_eq!(p.x, 10.0);
/// assert_eq!(p.y, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    /// Creates a new point with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in world space.
///
/// Used for the player's bounding box, building footprints and the camera
/// window. Overlap is *strict*: both axis intervals must have positive-length
/// intersection, so rects that merely touch edges do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl WorldRect {
    /// Creates a new rectangle from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Moves the rectangle so its center is at the given point.
    pub fn set_center(&mut self, center: WorldPoint) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    /// Tests strict axis-aligned overlap with another rectangle.
    ///
    /// Touching edges do not count: the intersection must have positive
    /// length on both axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_escape::WorldRect;
    ///
    /// let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
    /// let b = WorldRect::new(10.0, 0.0, 10.0, 10.0);
    /// assert!(!a.overlaps(&b)); // edge contact only
    /// assert!(a.overlaps(&WorldRect::new(9.0, 9.0, 5.0, 5.0)));
    /// ```
    pub fn overlaps(&self, other: &WorldRect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Clamps the rectangle's origin so it lies within a `map_w` x `map_h`
    /// area. If the map is smaller than the rectangle the origin pins to 0
    /// rather than going negative.
    pub fn clamp_to_bounds(&mut self, map_w: f32, map_h: f32) {
        self.x = self.x.min(map_w - self.w).max(0.0);
        self.y = self.y.min(map_h - self.h).max(0.0);
    }
}

/// Horizontal facing of a sprite-bearing entity.
///
/// Persists across stops and vertical-only movement; only horizontal input
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Which visual variant of the sprite to show for the current motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteVariant {
    /// Standing still
    Idle,
    /// Moving in the current facing direction
    Running,
}

/// Derives the new facing and sprite variant from a movement delta.
///
/// Horizontal input always overrides facing. Vertical-only movement keeps
/// the previous facing with the running sprite. Zero movement keeps the
/// previous facing but forces the idle sprite.
///
/// # Examples
///
/// ```
/// use campus_escape::{derive_facing, Facing, SpriteVariant};
///
/// let (f, v) = derive_facing(Facing::Left, 1.0, 0.0);
/// assert_eq!((f, v), (Facing::Right, SpriteVariant::Running));
///
/// let (f, v) = derive_facing(Facing::Right, 0.0, -1.0);
/// assert_eq!((f, v), (Facing::Right, SpriteVariant::Running));
///
/// let (f, v) = derive_facing(Facing::Left, 0.0, 0.0);
/// assert_eq!((f, v), (Facing::Left, SpriteVariant::Idle));
/// ```
pub fn derive_facing(prev: Facing, dx: f32, dy: f32) -> (Facing, SpriteVariant) {
    if dx > 0.0 {
        (Facing::Right, SpriteVariant::Running)
    } else if dx < 0.0 {
        (Facing::Left, SpriteVariant::Running)
    } else if dy != 0.0 {
        (prev, SpriteVariant::Running)
    } else {
        (prev, SpriteVariant::Idle)
    }
}

/// Tunable gameplay constants, hoisted out of the individual systems.
///
/// The defaults match the shipped balance. A JSON file with any subset of
/// fields can override them via [`GameConfig::from_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health the player starts with, and the cap
    pub max_health: i32,
    /// Health removed per pursuer collision in an encounter
    pub damage_per_hit: i32,
    /// World-map player speed in pixels per second
    pub player_speed: f32,
    /// Player step per frame inside an encounter, in pixels
    pub encounter_player_step: f32,
    /// Pursuer step per frame per axis inside an encounter, in pixels
    pub encounter_pursuer_step: f32,
    /// Camera magnification factor; must be positive
    pub zoom: f32,
    /// Minimap size as a fraction of the map size
    pub minimap_scale: f32,
    /// Player bounding box side length on the world map, in pixels
    pub player_size: f32,
    /// Player bounding box side length inside an encounter, in pixels
    pub encounter_player_size: f32,
    /// Pursuer bounding box side length, in pixels
    pub pursuer_size: f32,
    /// Seconds the simulation holds after a non-fatal hit
    pub hit_pause_secs: f32,
    /// Seconds the death banner shows before the encounter resolves
    pub death_pause_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            damage_per_hit: 20,
            player_speed: 300.0,
            encounter_player_step: 5.0,
            encounter_pursuer_step: 2.0,
            zoom: 2.5,
            minimap_scale: 0.18,
            player_size: 48.0,
            encounter_player_size: 100.0,
            pursuer_size: 120.0,
            hit_pause_secs: 0.3,
            death_pause_secs: 1.5,
        }
    }
}

impl GameConfig {
    /// Loads a configuration from a JSON file, falling back to the defaults
    /// for any field the file omits.
    pub fn from_file(path: &Path) -> CampusResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the construction-time preconditions of the systems this
    /// configuration feeds.
    pub fn validate(&self) -> CampusResult<()> {
        if self.zoom <= 0.0 {
            return Err(CampusError::InvalidState(format!(
                "zoom must be positive, got {}",
                self.zoom
            )));
        }
        if self.max_health <= 0 {
            return Err(CampusError::InvalidState(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_roundtrip() {
        let mut rect = WorldRect::new(0.0, 0.0, 48.0, 48.0);
        rect.set_center(WorldPoint::new(100.0, 60.0));
        assert_eq!(rect.center(), WorldPoint::new(100.0, 60.0));
        assert_eq!(rect.x, 76.0);
        assert_eq!(rect.y, 36.0);
    }

    #[test]
    fn test_overlap_requires_positive_intersection() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&WorldRect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching on the right edge
        assert!(!a.overlaps(&WorldRect::new(10.0, 0.0, 10.0, 10.0)));
        // Touching on the bottom edge
        assert!(!a.overlaps(&WorldRect::new(0.0, 10.0, 10.0, 10.0)));
        // Fully disjoint
        assert!(!a.overlaps(&WorldRect::new(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = WorldRect::new(295.0, 398.0, 46.0, 61.0);
        let b = WorldRect::new(300.0, 400.0, 48.0, 48.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let mut rect = WorldRect::new(-5.0, 990.0, 48.0, 48.0);
        rect.clamp_to_bounds(1000.0, 1000.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 952.0);
    }

    #[test]
    fn test_clamp_with_map_smaller_than_rect() {
        // Degenerate case: the lower bound wins, no panic.
        let mut rect = WorldRect::new(30.0, 30.0, 100.0, 100.0);
        rect.clamp_to_bounds(50.0, 50.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_derive_facing_horizontal_overrides() {
        assert_eq!(
            derive_facing(Facing::Left, 1.0, -1.0),
            (Facing::Right, SpriteVariant::Running)
        );
        assert_eq!(
            derive_facing(Facing::Right, -1.0, 1.0),
            (Facing::Left, SpriteVariant::Running)
        );
    }

    #[test]
    fn test_derive_facing_vertical_preserves() {
        assert_eq!(
            derive_facing(Facing::Left, 0.0, 1.0),
            (Facing::Left, SpriteVariant::Running)
        );
        assert_eq!(
            derive_facing(Facing::Right, 0.0, -1.0),
            (Facing::Right, SpriteVariant::Running)
        );
    }

    #[test]
    fn test_derive_facing_idle_keeps_facing() {
        assert_eq!(
            derive_facing(Facing::Left, 0.0, 0.0),
            (Facing::Left, SpriteVariant::Idle)
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_health, 100);
        assert_eq!(config.damage_per_hit, 20);
        assert_eq!(config.zoom, 2.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_nonpositive_zoom() {
        let config = GameConfig {
            zoom: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
