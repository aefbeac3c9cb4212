//! Interaction controller and the session state it owns.
//!
//! A [`ViewportSession`] holds everything that changes while the map is open:
//! the scene offset, the drag state, and which entity the pointer is over.
//! The host forwards DOM events to the `on_*` handlers and applies the
//! returned [`Action`]s to its [`DrawSurface`] with [`apply_actions`]. The
//! session never touches the display itself, so all of it runs in plain
//! unit tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use rand::Rng;

use crate::authoring::{author_planet, coordinate_label};
use crate::catalog::{Catalog, PlanetDetail};
use crate::consts::{CURSOR_GRAB, CURSOR_GRABBING, DEFAULT_SCENE_EDGE_PX, POINTER_LABEL_OFFSET_PX};
use crate::hit::hit_test;
use crate::input::{InputState, PointerSource, primary_touch};
use crate::render::{self, DrawSurface, EntityKey, EntityVisual, build_visuals, scene_extent};
use crate::viewport::{Point, Size, Viewport, translate_css};

/// Display changes requested by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move the scene layer.
    Translate { offset: Point, css: String },
    ShowTooltip { text: String, at: Point },
    MoveTooltip { at: Point },
    HideTooltip,
    OpenDetail(PlanetDetail),
    CloseDetail,
    SetCursor(&'static str),
    /// Debug readout of the scene coordinate under the pointer.
    ShowCoordinates { text: String, at: Point },
    HideCoordinates,
    /// Put text on the system clipboard.
    CopyToClipboard(String),
}

/// Session options fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    /// The scene is never smaller than this, whatever the entity extents.
    pub min_scene: Size,
    /// Reveal unknown planets in tooltips and enable authoring helpers.
    pub debug: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self { min_scene: Size::new(DEFAULT_SCENE_EDGE_PX, DEFAULT_SCENE_EDGE_PX), debug: false }
    }
}

/// All mutable map state, owned by the interaction controller.
#[derive(Debug, Clone)]
pub struct ViewportSession {
    catalog: Catalog,
    visuals: Vec<EntityVisual>,
    viewport: Viewport,
    input: InputState,
    hover: Option<EntityKey>,
    options: MapOptions,
}

impl Default for ViewportSession {
    fn default() -> Self {
        Self::new(MapOptions::default())
    }
}

impl ViewportSession {
    #[must_use]
    pub fn new(options: MapOptions) -> Self {
        Self {
            catalog: Catalog::default(),
            visuals: Vec::new(),
            viewport: Viewport::new(Size::default(), options.min_scene),
            input: InputState::Idle,
            hover: None,
            options,
        }
    }

    // --- Data inputs ---

    /// Install the catalog and lay out its visuals. The scene grows to cover them.
    pub fn load(&mut self, catalog: Catalog) {
        self.visuals = build_visuals(&catalog);
        self.catalog = catalog;
        self.hover = None;
        self.viewport
            .set_scene(scene_extent(&self.visuals, self.options.min_scene));
    }

    /// Record the container's measured size.
    pub fn set_container(&mut self, size: Size) -> Vec<Action> {
        self.viewport.set_container(size);
        vec![self.translate_action()]
    }

    /// Center the scene in the container. Called once after the first render.
    pub fn center(&mut self) -> Vec<Action> {
        self.viewport.center();
        vec![self.translate_action()]
    }

    /// Draw every visual and the current translation.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        render::draw(surface, &self.visuals, self.viewport.offset());
    }

    // --- Pointer input (container-relative coordinates) ---

    /// Start a drag unless the pointer is over an entity.
    pub fn on_pointer_down(&mut self, screen: Point, source: PointerSource) -> Vec<Action> {
        if self.entity_at(screen).is_some() {
            return Vec::new();
        }
        self.input = InputState::Dragging { anchor: self.viewport.anchor_for(screen), source };
        vec![Action::SetCursor(CURSOR_GRABBING)]
    }

    /// Pan if dragging, then refresh hover and the debug readout.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.options.debug {
            actions.push(Action::ShowCoordinates {
                text: coordinate_label(self.viewport.screen_to_scene(screen)),
                at: label_position(screen),
            });
        }
        if let Some(action) = self.pan(screen, PointerSource::Mouse) {
            actions.push(action);
        }
        actions.extend(self.update_hover(screen));
        actions
    }

    /// Pan only, with no hover or readout updates. For moves the container
    /// does not see, such as a drag continuing past its edge.
    pub fn on_drag_move(&mut self, screen: Point) -> Vec<Action> {
        self.pan(screen, PointerSource::Mouse).into_iter().collect()
    }

    /// End the active drag if `source` started it.
    pub fn on_pointer_up(&mut self, source: PointerSource) -> Vec<Action> {
        if !self.input.is_dragged_by(source) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_GRAB)]
    }

    /// The pointer left the container: drop hover feedback. Drags continue.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.hover.take().is_some() {
            actions.push(Action::HideTooltip);
        }
        if self.options.debug {
            actions.push(Action::HideCoordinates);
        }
        actions
    }

    /// Open the detail modal for a known planet under the pointer.
    pub fn on_click(&mut self, screen: Point) -> Vec<Action> {
        let Some(EntityKey::Planet(index)) = self.entity_at(screen) else {
            return Vec::new();
        };
        self.catalog
            .planets
            .get(index)
            .and_then(|planet| planet.detail())
            .map(Action::OpenDetail)
            .into_iter()
            .collect()
    }

    /// In debug mode, author a new planet record at the pointer and copy it.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the record cannot be rendered as JSON.
    pub fn on_double_click<R: Rng + ?Sized>(
        &mut self,
        screen: Point,
        rng: &mut R,
    ) -> Result<Vec<Action>, serde_json::Error> {
        if !self.options.debug {
            return Ok(Vec::new());
        }
        let record = author_planet(self.viewport.screen_to_scene(screen), rng);
        Ok(vec![Action::CopyToClipboard(record.to_pretty_json()?)])
    }

    /// Close the detail modal (close control or click outside its content).
    #[must_use]
    pub fn dismiss_detail(&self) -> Vec<Action> {
        vec![Action::CloseDetail]
    }

    // --- Touch input: mirrors the pointer using the first touch ---

    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        match primary_touch(touches) {
            Some(pt) => self.on_pointer_down(pt, PointerSource::Touch),
            None => Vec::new(),
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        match primary_touch(touches) {
            Some(pt) => self.pan(pt, PointerSource::Touch).into_iter().collect(),
            None => Vec::new(),
        }
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.on_pointer_up(PointerSource::Touch)
    }

    // --- Queries ---

    #[must_use]
    pub fn offset(&self) -> Point {
        self.viewport.offset()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn visuals(&self) -> &[EntityVisual] {
        &self.visuals
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<EntityKey> {
        self.hover
    }

    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.options.debug
    }

    /// Hover label for an entity.
    #[must_use]
    pub fn tooltip_text(&self, key: EntityKey) -> Option<&str> {
        match key {
            EntityKey::Planet(i) => self
                .catalog
                .planets
                .get(i)
                .map(|p| p.tooltip_label(self.options.debug)),
            EntityKey::Marker(i) => self.catalog.markers.get(i).map(|m| m.title.as_str()),
        }
    }

    // --- Internals ---

    fn entity_at(&self, screen: Point) -> Option<EntityKey> {
        hit_test(self.viewport.screen_to_scene(screen), &self.visuals)
    }

    fn pan(&mut self, screen: Point, source: PointerSource) -> Option<Action> {
        let anchor = self.input.anchor_from(source)?;
        self.viewport.pan_to(screen, anchor);
        Some(self.translate_action())
    }

    fn update_hover(&mut self, screen: Point) -> Option<Action> {
        let hit = self.entity_at(screen);
        let previous = std::mem::replace(&mut self.hover, hit);
        let at = label_position(screen);
        match (previous, hit) {
            (Some(before), Some(now)) if before == now => Some(Action::MoveTooltip { at }),
            (_, Some(now)) => self
                .tooltip_text(now)
                .map(|text| Action::ShowTooltip { text: text.to_owned(), at }),
            (Some(_), None) => Some(Action::HideTooltip),
            (None, None) => None,
        }
    }

    fn translate_action(&self) -> Action {
        let offset = self.viewport.offset();
        Action::Translate { offset, css: translate_css(offset) }
    }
}

fn label_position(screen: Point) -> Point {
    screen + Point::new(POINTER_LABEL_OFFSET_PX, POINTER_LABEL_OFFSET_PX)
}

/// Apply session actions to a surface, in order.
///
/// Clipboard writes are not a display concern and are skipped here; the host
/// handles [`Action::CopyToClipboard`] itself.
pub fn apply_actions<S: DrawSurface + ?Sized>(surface: &mut S, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Translate { offset, css } => surface.set_translation(*offset, css),
            Action::ShowTooltip { text, at } => surface.show_tooltip(text, *at),
            Action::MoveTooltip { at } => surface.move_tooltip(*at),
            Action::HideTooltip => surface.hide_tooltip(),
            Action::OpenDetail(detail) => surface.show_detail(detail),
            Action::CloseDetail => surface.hide_detail(),
            Action::SetCursor(cursor) => surface.set_cursor(cursor),
            Action::ShowCoordinates { text, at } => surface.show_coordinates(text, *at),
            Action::HideCoordinates => surface.hide_coordinates(),
            Action::CopyToClipboard(_) => {}
        }
    }
}
