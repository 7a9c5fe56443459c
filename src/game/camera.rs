//! # Viewport Camera
//!
//! Maps world coordinates to screen coordinates under a fixed zoom factor.
//! The camera window is centered on a tracked entity and clamped so it never
//! leaves the map on either axis.

use crate::game::{WorldPoint, WorldRect};
use serde::{Deserialize, Serialize};

/// A zoomed camera over the world map.
///
/// The viewport's world dimensions are `screen / zoom`; one world pixel
/// covers `zoom` screen pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    rect: WorldRect,
    zoom: f32,
    map_w: f32,
    map_h: f32,
}

impl Camera {
    /// Creates a camera for the given screen and map dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `zoom` is not positive; a degenerate zoom is a
    /// construction-time precondition violation, not a runtime error.
    pub fn new(screen_w: f32, screen_h: f32, zoom: f32, map_w: f32, map_h: f32) -> Self {
        assert!(zoom > 0.0, "camera zoom must be positive");
        let mut rect = WorldRect::new(0.0, 0.0, screen_w / zoom, screen_h / zoom);
        rect.clamp_to_bounds(map_w, map_h);
        Self {
            rect,
            zoom,
            map_w,
            map_h,
        }
    }

    /// Recenters the camera on a tracked point, then clamps to the map.
    pub fn set_tracked_center(&mut self, center: WorldPoint) {
        self.rect.set_center(center);
        self.rect.clamp_to_bounds(self.map_w, self.map_h);
    }

    /// Converts a world-space point to screen pixels.
    pub fn world_to_screen(&self, point: WorldPoint) -> (f32, f32) {
        (
            (point.x - self.rect.x) * self.zoom,
            (point.y - self.rect.y) * self.zoom,
        )
    }

    /// The world-space rectangle currently visible on screen, i.e. the
    /// slice of the map image to blit.
    pub fn screen_region(&self) -> WorldRect {
        self.rect
    }

    /// The zoom factor set at construction.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        // 1200x800 screen at 2.5x zoom over a 1000x1000 map: 480x320 window
        Camera::new(1200.0, 800.0, 2.5, 1000.0, 1000.0)
    }

    #[test]
    fn test_viewport_dimensions_derive_from_zoom() {
        let cam = camera();
        let region = cam.screen_region();
        assert_eq!(region.w, 480.0);
        assert_eq!(region.h, 320.0);
    }

    #[test]
    #[should_panic(expected = "zoom must be positive")]
    fn test_zero_zoom_panics() {
        let _ = Camera::new(1200.0, 800.0, 0.0, 1000.0, 1000.0);
    }

    #[test]
    fn test_tracking_centers_on_target() {
        let mut cam = camera();
        cam.set_tracked_center(WorldPoint::new(500.0, 500.0));
        let region = cam.screen_region();
        assert_eq!(region.center(), WorldPoint::new(500.0, 500.0));
    }

    #[test]
    fn test_tracking_clamps_at_map_edges() {
        let mut cam = camera();

        cam.set_tracked_center(WorldPoint::new(0.0, 0.0));
        let region = cam.screen_region();
        assert_eq!((region.x, region.y), (0.0, 0.0));

        cam.set_tracked_center(WorldPoint::new(1000.0, 1000.0));
        let region = cam.screen_region();
        assert_eq!(region.x, 1000.0 - region.w);
        assert_eq!(region.y, 1000.0 - region.h);
    }

    #[test]
    fn test_map_smaller_than_viewport_pins_origin() {
        let mut cam = Camera::new(1200.0, 800.0, 2.5, 100.0, 100.0);
        cam.set_tracked_center(WorldPoint::new(50.0, 50.0));
        let region = cam.screen_region();
        assert_eq!((region.x, region.y), (0.0, 0.0));
    }

    #[test]
    fn test_world_to_screen_scales_by_zoom() {
        let mut cam = camera();
        cam.set_tracked_center(WorldPoint::new(500.0, 500.0));
        let region = cam.screen_region();
        let (sx, sy) = cam.world_to_screen(WorldPoint::new(region.x + 10.0, region.y + 20.0));
        assert_eq!((sx, sy), (25.0, 50.0));
    }
}
