//! Recording draw surface shared by unit tests.

use crate::catalog::PlanetDetail;
use crate::render::{DrawSurface, EntityVisual};
use crate::viewport::Point;

/// Remembers what the map asked the display to show.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub entities: Vec<EntityVisual>,
    pub translation: Option<(Point, String)>,
    pub tooltip: Option<(String, Point)>,
    pub detail: Option<PlanetDetail>,
    pub cursor: Option<&'static str>,
    pub coordinates: Option<(String, Point)>,
    pub clears: usize,
}

impl DrawSurface for RecordingSurface {
    fn clear_entities(&mut self) {
        self.entities.clear();
        self.clears += 1;
    }

    fn place_entity(&mut self, visual: &EntityVisual) {
        self.entities.push(visual.clone());
    }

    fn set_translation(&mut self, offset: Point, css: &str) {
        self.translation = Some((offset, css.to_owned()));
    }

    fn show_tooltip(&mut self, text: &str, at: Point) {
        self.tooltip = Some((text.to_owned(), at));
    }

    fn move_tooltip(&mut self, at: Point) {
        if let Some((_, pos)) = self.tooltip.as_mut() {
            *pos = at;
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
        self.cursor = Some(cursor);
    }

    fn show_coordinates(&mut self, text: &str, at: Point) {
        self.coordinates = Some((text.to_owned(), at));
    }

    fn hide_coordinates(&mut self) {
        self.coordinates = None;
    }
}
