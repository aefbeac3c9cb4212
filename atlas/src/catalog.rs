//! Catalog: the planet and marker records that populate the map.
//!
//! Records arrive as two JSON arrays (`planets.json`, `markers.json`) and are
//! immutable for the rest of the session. Field names on the wire are
//! camelCase. Optional flags default to `false` so hand-authored records may
//! omit them.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::consts::REDACTED_LABEL;

/// Which fixture a decode error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Planets,
    Markers,
}

impl Fixture {
    /// Path of the fixture relative to the site root.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Planets => "data/planets.json",
            Self::Markers => "data/markers.json",
        }
    }
}

impl std::fmt::Display for Fixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Errors produced while decoding fixtures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The fixture body is not a JSON array of the expected records.
    #[error("{fixture} is malformed: {source}")]
    Decode {
        fixture: Fixture,
        #[source]
        source: serde_json::Error,
    },
}

/// A planet record.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    /// Left edge of the planet's bounding square in scene coordinates.
    pub x: f64,
    /// Top edge of the planet's bounding square in scene coordinates.
    pub y: f64,
    pub radius: f64,
    pub color: String,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub visible: bool,
    /// Drawn as a placeholder whose details stay hidden from regular viewers.
    #[serde(default)]
    pub unknown: bool,
    #[serde(default)]
    pub has_anchor: bool,
}

impl Planet {
    /// Whether the planet gets a visual at all. Hidden planets that are not
    /// `unknown` are omitted entirely.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.visible || self.unknown
    }

    /// Border color to draw, if the planet carries an anchor.
    #[must_use]
    pub fn anchor_border(&self) -> Option<&str> {
        if !self.has_anchor {
            return None;
        }
        self.border_color.as_deref().filter(|c| !c.is_empty())
    }

    /// Hover label. Unknown planets are redacted unless `debug` is set.
    #[must_use]
    pub fn tooltip_label(&self, debug: bool) -> &str {
        if debug || !self.unknown { &self.name } else { REDACTED_LABEL }
    }

    /// Detail shown when the planet is clicked. Unknown planets have none.
    #[must_use]
    pub fn detail(&self) -> Option<PlanetDetail> {
        if self.unknown {
            return None;
        }
        Some(PlanetDetail { name: self.name.clone(), info: self.info.clone(), race: self.race.clone() })
    }
}

/// Contents of the planet info modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetDetail {
    pub name: String,
    pub info: String,
    pub race: String,
}

/// A marker record: a small icon pin with a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    /// Font Awesome icon class, e.g. `fa-star`.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub visible: bool,
}

impl Marker {
    /// Icon class, treating an empty string as absent.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|i| !i.is_empty())
    }

    /// Markers render only when visible and carrying an icon.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.visible && self.icon().is_some()
    }
}

/// Every record loaded at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub planets: Vec<Planet>,
    pub markers: Vec<Marker>,
}

impl Catalog {
    #[must_use]
    pub fn new(planets: Vec<Planet>, markers: Vec<Marker>) -> Self {
        Self { planets, markers }
    }

    /// Decode both fixture bodies. Either one failing fails the whole load.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] naming the first fixture that does not parse.
    pub fn from_json(planets: &str, markers: &str) -> Result<Self, CatalogError> {
        let planets = serde_json::from_str(planets)
            .map_err(|source| CatalogError::Decode { fixture: Fixture::Planets, source })?;
        let markers = serde_json::from_str(markers)
            .map_err(|source| CatalogError::Decode { fixture: Fixture::Markers, source })?;
        Ok(Self { planets, markers })
    }

    /// Look up a planet by id.
    #[must_use]
    pub fn planet(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Look up a marker by id.
    #[must_use]
    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Number of records that will produce a visual.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.planets.iter().filter(|p| p.is_rendered()).count()
            + self.markers.iter().filter(|m| m.is_rendered()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty() && self.markers.is_empty()
    }
}
