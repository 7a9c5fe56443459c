//! # Building Proximity Index
//!
//! A fixed, ordered set of named building footprints on the campus map, with
//! a first-overlap query used to trigger entry prompts.

use crate::game::WorldRect;
use serde::{Deserialize, Serialize};

/// A named, immutable building footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub rect: WorldRect,
}

impl Building {
    pub fn new(name: &str, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            name: name.to_string(),
            rect: WorldRect::new(x, y, w, h),
        }
    }
}

/// Ordered lookup over the building set.
///
/// The set is injected at construction and fixed for the process lifetime.
/// Queries walk the list in insertion order and report at most one building,
/// so results are deterministic even when the player's box spans two rects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingIndex {
    buildings: Vec<Building>,
}

impl BuildingIndex {
    /// Creates an index over the given ordered building list.
    pub fn new(buildings: Vec<Building>) -> Self {
        Self { buildings }
    }

    /// The campus building table, in the order prompts resolve.
    pub fn campus() -> Self {
        Self::new(vec![
            Building::new("정의관", 295.0, 398.0, 46.0, 61.0),
            Building::new("청송관", 395.0, 301.0, 66.0, 40.0),
            Building::new("컨버전스홀", 505.0, 409.0, 90.0, 51.0),
            Building::new("학생회관", 438.0, 503.0, 50.0, 64.0),
            Building::new("도서관", 636.0, 490.0, 37.0, 76.0),
            // Two wings merged into one footprint
            Building::new("미래관", 748.0, 450.0, 55.0, 110.0),
            Building::new("창조관", 623.0, 289.0, 90.0, 53.0),
            Building::new("백운관", 741.0, 131.0, 92.0, 51.0),
        ])
    }

    /// Returns the name of the first building whose footprint strictly
    /// overlaps `rect`, or `None` if the rect is on open ground.
    pub fn query(&self, rect: &WorldRect) -> Option<&str> {
        self.buildings
            .iter()
            .find(|b| b.rect.overlaps(rect))
            .map(|b| b.name.as_str())
    }

    /// All buildings in insertion order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_inside_building() {
        let index = BuildingIndex::campus();
        // Player box fully inside 정의관 (295, 398, 46, 61)
        let player = WorldRect::new(300.0, 405.0, 30.0, 30.0);
        assert_eq!(index.query(&player), Some("정의관"));
    }

    #[test]
    fn test_query_open_ground() {
        let index = BuildingIndex::campus();
        let player = WorldRect::new(10.0, 10.0, 48.0, 48.0);
        assert_eq!(index.query(&player), None);
    }

    #[test]
    fn test_query_touching_edge_is_not_overlap() {
        let index = BuildingIndex::new(vec![Building::new("hall", 100.0, 100.0, 50.0, 50.0)]);
        let player = WorldRect::new(150.0, 100.0, 48.0, 48.0);
        assert_eq!(index.query(&player), None);
    }

    #[test]
    fn test_query_reports_first_in_insertion_order() {
        let index = BuildingIndex::new(vec![
            Building::new("first", 0.0, 0.0, 100.0, 100.0),
            Building::new("second", 50.0, 0.0, 100.0, 100.0),
        ]);
        // Spans both rects; insertion order decides.
        let player = WorldRect::new(60.0, 10.0, 48.0, 48.0);
        assert_eq!(index.query(&player), Some("first"));
    }

    #[test]
    fn test_query_is_idempotent() {
        let index = BuildingIndex::campus();
        let player = WorldRect::new(640.0, 500.0, 48.0, 48.0);
        let a = index.query(&player);
        let b = index.query(&player);
        assert_eq!(a, b);
        assert_eq!(a, Some("도서관"));
    }

    #[test]
    fn test_campus_table_is_complete() {
        let index = BuildingIndex::campus();
        assert_eq!(index.buildings().len(), 8);
        assert_eq!(index.buildings()[0].name, "정의관");
        assert_eq!(index.buildings()[7].name, "백운관");
    }
}
