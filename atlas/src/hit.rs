//! Hit-testing the pointer against entity visuals.
//!
//! Planets are discs inscribed in their bounding square; markers are their
//! full square. Later visuals are drawn on top, so the search runs back to
//! front and the first match wins.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::render::{EntityKey, EntityVisual};
use crate::viewport::Point;

/// Whether `scene_pt` falls on `visual`.
#[must_use]
pub fn contains(visual: &EntityVisual, scene_pt: Point) -> bool {
    match visual.key {
        EntityKey::Planet(_) => {
            let r = visual.size.width / 2.0;
            let dx = scene_pt.x - (visual.origin.x + r);
            let dy = scene_pt.y - (visual.origin.y + r);
            dx * dx + dy * dy <= r * r
        }
        EntityKey::Marker(_) => {
            let far = visual.far_corner();
            (visual.origin.x..=far.x).contains(&scene_pt.x) && (visual.origin.y..=far.y).contains(&scene_pt.y)
        }
    }
}

/// The topmost entity under `scene_pt`, if any.
#[must_use]
pub fn hit_test(scene_pt: Point, visuals: &[EntityVisual]) -> Option<EntityKey> {
    visuals
        .iter()
        .rev()
        .find(|v| contains(v, scene_pt))
        .map(|v| v.key)
}
