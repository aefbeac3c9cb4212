//! Debug-mode authoring helpers.
//!
//! With `?debug=true` the map shows the scene coordinate under the pointer
//! and a double-click produces a ready-to-paste planet record for that spot.
//! The record is never added to the live catalog; the host copies it to the
//! clipboard and the author pastes it into `planets.json` by hand.

#[cfg(test)]
#[path = "authoring_test.rs"]
mod authoring_test;

use rand::Rng;
use serde::Serialize;

use crate::consts::{AUTHORED_RADIUS_MAX, AUTHORED_RADIUS_MIN};
use crate::hash::{string_hash, to_base36};
use crate::viewport::Point;

/// Largest value of a 24-bit color; random colors are drawn strictly below it.
const COLOR_SPACE: u32 = 0x00FF_FFFF;

/// A new planet record, serialized in the same shape as `planets.json` entries.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoredPlanet {
    pub id: String,
    pub x: i64,
    pub y: i64,
    pub radius: u32,
    pub color: String,
    pub border_color: Option<String>,
    pub name: String,
    pub info: String,
    pub visible: bool,
    pub unknown: bool,
    pub race: String,
}

/// Round half-way values toward positive infinity, the way browsers round pixels.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Integer scene coordinates of a point.
#[must_use]
pub fn rounded(scene_pt: Point) -> (i64, i64) {
    (round_half_up(scene_pt.x), round_half_up(scene_pt.y))
}

/// Readout text for the debug coordinate label.
#[must_use]
pub fn coordinate_label(scene_pt: Point) -> String {
    let (x, y) = rounded(scene_pt);
    format!("x: {x}, y: {y}")
}

/// Short id derived from the integer coordinates.
#[must_use]
pub fn authored_id(x: i64, y: i64) -> String {
    to_base36(string_hash(&format!("{x},{y}")))
}

/// Random `#rrggbb` color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..COLOR_SPACE))
}

/// A placeholder planet at `scene_pt` with a random color and radius.
pub fn author_planet<R: Rng + ?Sized>(scene_pt: Point, rng: &mut R) -> AuthoredPlanet {
    let (x, y) = rounded(scene_pt);
    AuthoredPlanet {
        id: authored_id(x, y),
        x,
        y,
        radius: rng.random_range(AUTHORED_RADIUS_MIN..=AUTHORED_RADIUS_MAX),
        color: random_color(rng),
        border_color: None,
        name: String::new(),
        info: String::new(),
        visible: true,
        unknown: true,
        race: String::new(),
    }
}

impl AuthoredPlanet {
    /// Pretty-printed JSON, two-space indented.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures; none occur for this plain struct in practice.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
