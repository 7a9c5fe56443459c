//! # Minimap Projector
//!
//! A stateless linear scale-down of world coordinates onto a fixed overlay
//! region. Recomputed every frame from the current player and camera state.

use crate::game::{WorldPoint, WorldRect};
use serde::{Deserialize, Serialize};

/// Projects world-space geometry onto the minimap overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Minimap {
    origin_x: f32,
    origin_y: f32,
    width: f32,
    height: f32,
    map_w: f32,
    map_h: f32,
}

impl Minimap {
    /// Creates a projector onto an overlay at `(origin_x, origin_y)` of
    /// `width` x `height` screen pixels, covering a `map_w` x `map_h` world.
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32, map_w: f32, map_h: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
            map_w,
            map_h,
        }
    }

    /// Places the minimap in the screen's top-right corner with a 20px
    /// margin, sized as `scale` times the map.
    pub fn top_right(screen_w: f32, map_w: f32, map_h: f32, scale: f32) -> Self {
        let width = map_w * scale;
        let height = map_h * scale;
        Self::new(screen_w - width - 20.0, 20.0, width, height, map_w, map_h)
    }

    /// Projects a world point onto the overlay.
    pub fn project_point(&self, point: WorldPoint) -> (f32, f32) {
        (
            self.origin_x + (point.x / self.map_w) * self.width,
            self.origin_y + (point.y / self.map_h) * self.height,
        )
    }

    /// Projects a world rect (typically the camera window) onto the overlay.
    pub fn project_rect(&self, rect: &WorldRect) -> WorldRect {
        let (x, y) = self.project_point(WorldPoint::new(rect.x, rect.y));
        WorldRect::new(
            x,
            y,
            (rect.w / self.map_w) * self.width,
            (rect.h / self.map_h) * self.height,
        )
    }

    /// The overlay's own screen-space rectangle, for drawing its backdrop.
    pub fn overlay_rect(&self) -> WorldRect {
        WorldRect::new(self.origin_x, self.origin_y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_point_scales_linearly() {
        let minimap = Minimap::new(980.0, 20.0, 180.0, 180.0, 1000.0, 1000.0);
        assert_eq!(minimap.project_point(WorldPoint::new(0.0, 0.0)), (980.0, 20.0));
        assert_eq!(
            minimap.project_point(WorldPoint::new(500.0, 1000.0)),
            (1070.0, 200.0)
        );
    }

    #[test]
    fn test_project_rect_scales_dimensions() {
        let minimap = Minimap::new(0.0, 0.0, 200.0, 100.0, 1000.0, 500.0);
        let cam = WorldRect::new(100.0, 50.0, 480.0, 320.0);
        let projected = minimap.project_rect(&cam);
        assert_eq!(projected.x, 20.0);
        assert_eq!(projected.y, 10.0);
        assert_eq!(projected.w, 96.0);
        assert_eq!(projected.h, 64.0);
    }

    #[test]
    fn test_top_right_placement() {
        let minimap = Minimap::top_right(1200.0, 1000.0, 1000.0, 0.18);
        let overlay = minimap.overlay_rect();
        assert_eq!(overlay.w, 180.0);
        assert_eq!(overlay.h, 180.0);
        assert_eq!(overlay.x, 1000.0);
        assert_eq!(overlay.y, 20.0);
    }
}
