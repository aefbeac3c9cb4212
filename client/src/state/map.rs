//! Display state for the map, written by session actions and read by views.
//!
//! ARCHITECTURE
//! ============
//! `MapState` is the browser's `DrawSurface`: the map host applies
//! `ViewportSession` actions to it inside `RwSignal::update`, and the scene,
//! tooltip, modal and debug overlay components re-render from the signal.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use atlas::catalog::PlanetDetail;
use atlas::consts::CURSOR_GRAB;
use atlas::render::{DrawSurface, EntityVisual};
use atlas::session::MapOptions;
use atlas::viewport::{Point, Size, translate_css};

/// Progress of the one-shot fixture load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Text pinned next to the pointer, in container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerLabel {
    pub text: String,
    pub at: Point,
}

#[derive(Clone, Debug)]
pub struct MapState {
    pub status: LoadStatus,
    pub entities: Vec<EntityVisual>,
    pub scene: Size,
    pub offset: Point,
    pub transform: String,
    pub tooltip: Option<PointerLabel>,
    pub detail: Option<PlanetDetail>,
    pub cursor: &'static str,
    pub coordinates: Option<PointerLabel>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            status: LoadStatus::Loading,
            entities: Vec::new(),
            scene: MapOptions::default().min_scene,
            offset: Point::default(),
            transform: translate_css(Point::default()),
            tooltip: None,
            detail: None,
            cursor: CURSOR_GRAB,
            coordinates: None,
        }
    }
}

impl DrawSurface for MapState {
    fn clear_entities(&mut self) {
        self.entities.clear();
    }

    fn place_entity(&mut self, visual: &EntityVisual) {
        self.entities.push(visual.clone());
    }

    fn set_translation(&mut self, offset: Point, css: &str) {
        self.offset = offset;
        css.clone_into(&mut self.transform);
    }

    fn show_tooltip(&mut self, text: &str, at: Point) {
        self.tooltip = Some(PointerLabel { text: text.to_owned(), at });
    }

    fn move_tooltip(&mut self, at: Point) {
        if let Some(label) = self.tooltip.as_mut() {
            label.at = at;
        }
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn show_detail(&mut self, detail: &PlanetDetail) {
        self.detail = Some(detail.clone());
    }

    fn hide_detail(&mut self) {
        self.detail = None;
    }

    fn set_cursor(&mut self, cursor: &'static str) {
        self.cursor = cursor;
    }

    fn show_coordinates(&mut self, text: &str, at: Point) {
        self.coordinates = Some(PointerLabel { text: text.to_owned(), at });
    }

    fn hide_coordinates(&mut self) {
        self.coordinates = None;
    }
}

/// Build session options from the `debug` query parameter.
///
/// Only the exact value `true` enables debug mode.
#[must_use]
pub fn options_from_query(debug: Option<&str>) -> MapOptions {
    MapOptions { debug: debug == Some("true"), ..MapOptions::default() }
}

/// CSS pixel length.
#[must_use]
pub fn px(v: f64) -> String {
    format!("{v}px")
}
