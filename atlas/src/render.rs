//! Rendering: turns catalog records into visual descriptors and draws them.
//!
//! Nothing here knows about the DOM. [`build_visuals`] produces one
//! [`EntityVisual`] per rendered record, in draw order, and [`draw`] pushes
//! them through a [`DrawSurface`]. The browser host implements the surface on
//! top of reactive signals; tests implement it with a recorder.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::catalog::{Catalog, Marker, Planet, PlanetDetail};
use crate::consts::{
    ANCHOR_BORDER_PX, MARKER_GLYPH_COLOR, MARKER_GLYPH_PX, MARKER_SIZE_PX, TEXTURE_TILE_PX, UNKNOWN_FILL,
};
use crate::hash::texture_index;
use crate::viewport::{Point, Size, translate_css};

/// Light highlight, fixed at the upper left of every known planet.
const HIGHLIGHT_GRADIENT: &str = "radial-gradient(circle at 30% 30%, rgba(255,255,255,0.4), transparent 70%)";

/// Dark shadow, fixed at the lower right of every known planet.
const SHADOW_GRADIENT: &str = "radial-gradient(circle at 70% 70%, rgba(0,0,0,0.4), transparent 70%)";

/// Blend modes for highlight, shadow, texture.
const LAYER_BLEND: &str = "screen, multiply, multiply";

/// Identifies a visual by the record it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    /// Index into [`Catalog::planets`].
    Planet(usize),
    /// Index into [`Catalog::markers`].
    Marker(usize),
}

/// How an entity is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Unrevealed planet: flat placeholder, no texture, no border.
    Placeholder,
    /// Known planet: base fill under lighting gradients and a tiled texture.
    Textured {
        fill: String,
        texture: u32,
        border: Option<String>,
    },
    /// Marker pin: fill color with an icon glyph.
    Pin { fill: String, icon: String },
}

/// Everything the display needs to place one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityVisual {
    pub key: EntityKey,
    pub id: String,
    /// Top-left corner in scene coordinates.
    pub origin: Point,
    pub size: Size,
    pub paint: Paint,
}

impl EntityVisual {
    /// CSS class of the element.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self.key {
            EntityKey::Planet(_) => "planet",
            EntityKey::Marker(_) => "marker",
        }
    }

    /// Bottom-right corner in scene coordinates.
    #[must_use]
    pub fn far_corner(&self) -> Point {
        Point::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    /// Icon classes for marker glyphs.
    #[must_use]
    pub fn icon_class(&self) -> Option<String> {
        match &self.paint {
            Paint::Pin { icon, .. } => Some(format!("fa {icon}")),
            _ => None,
        }
    }

    /// Inline style of the marker glyph element.
    #[must_use]
    pub fn icon_style(&self) -> Option<String> {
        match &self.paint {
            Paint::Pin { .. } => Some(format!("color: {MARKER_GLYPH_COLOR}; font-size: {MARKER_GLYPH_PX}px;")),
            _ => None,
        }
    }

    /// Inline style declarations, in application order.
    #[must_use]
    pub fn style(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![
            ("left", px(self.origin.x)),
            ("top", px(self.origin.y)),
            ("width", px(self.size.width)),
            ("height", px(self.size.height)),
        ];
        match &self.paint {
            Paint::Placeholder => {
                decls.push(("background-color", UNKNOWN_FILL.to_owned()));
            }
            Paint::Textured { fill, texture, border } => {
                if let Some(color) = border {
                    decls.push(("border", format!("{ANCHOR_BORDER_PX}px solid {color}")));
                }
                decls.push(("background-color", fill.clone()));
                decls.push((
                    "background-image",
                    format!("{HIGHLIGHT_GRADIENT}, {SHADOW_GRADIENT}, url(\"{}\")", texture_url(*texture)),
                ));
                decls.push(("background-blend-mode", LAYER_BLEND.to_owned()));
                decls.push(("background-repeat", "repeat".to_owned()));
                decls.push(("background-size", format!("{TEXTURE_TILE_PX}px {TEXTURE_TILE_PX}px")));
            }
            Paint::Pin { fill, .. } => {
                decls.push(("background-color", fill.clone()));
            }
        }
        decls
    }

    /// [`style`](Self::style) joined into a `style` attribute value.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.style()
            .iter()
            .map(|(prop, value)| format!("{prop}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn px(v: f64) -> String {
    format!("{v}px")
}

/// URI of the texture tile with the given one-based index.
#[must_use]
pub fn texture_url(index: u32) -> String {
    format!("img/textures/t%20({index}).png")
}

/// Visual for a planet, or `None` when the planet is gated out.
#[must_use]
pub fn planet_visual(index: usize, planet: &Planet) -> Option<EntityVisual> {
    if !planet.is_rendered() {
        return None;
    }
    let diameter = planet.radius * 2.0;
    let paint = if planet.unknown {
        Paint::Placeholder
    } else {
        Paint::Textured {
            fill: planet.color.clone(),
            texture: texture_index(&planet.id),
            border: planet.anchor_border().map(str::to_owned),
        }
    };
    Some(EntityVisual {
        key: EntityKey::Planet(index),
        id: planet.id.clone(),
        origin: Point::new(planet.x, planet.y),
        size: Size::new(diameter, diameter),
        paint,
    })
}

/// Visual for a marker, or `None` when the marker is hidden or has no icon.
#[must_use]
pub fn marker_visual(index: usize, marker: &Marker) -> Option<EntityVisual> {
    if !marker.is_rendered() {
        return None;
    }
    let icon = marker.icon()?.to_owned();
    Some(EntityVisual {
        key: EntityKey::Marker(index),
        id: marker.id.clone(),
        origin: Point::new(marker.x, marker.y),
        size: Size::new(MARKER_SIZE_PX, MARKER_SIZE_PX),
        paint: Paint::Pin { fill: marker.color.clone(), icon },
    })
}

/// All visuals in draw order: planets first, then markers, each in record order.
#[must_use]
pub fn build_visuals(catalog: &Catalog) -> Vec<EntityVisual> {
    let planets = catalog
        .planets
        .iter()
        .enumerate()
        .filter_map(|(i, p)| planet_visual(i, p));
    let markers = catalog
        .markers
        .iter()
        .enumerate()
        .filter_map(|(i, m)| marker_visual(i, m));
    planets.chain(markers).collect()
}

/// Scene size covering every visual, measured from the scene origin and never
/// smaller than `minimum`.
#[must_use]
pub fn scene_extent(visuals: &[EntityVisual], minimum: Size) -> Size {
    visuals.iter().fold(minimum, |acc, v| {
        let corner = v.far_corner();
        acc.max(Size::new(corner.x, corner.y))
    })
}

/// Capabilities the host display offers to the map.
pub trait DrawSurface {
    /// Drop every placed entity.
    fn clear_entities(&mut self);
    /// Add one entity to the scene layer.
    fn place_entity(&mut self, visual: &EntityVisual);
    /// Translate the scene layer.
    fn set_translation(&mut self, offset: Point, css: &str);
    /// Show the tooltip with `text` at container position `at`.
    fn show_tooltip(&mut self, text: &str, at: Point);
    /// Reposition a visible tooltip.
    fn move_tooltip(&mut self, at: Point);
    fn hide_tooltip(&mut self);
    fn show_detail(&mut self, detail: &PlanetDetail);
    fn hide_detail(&mut self);
    fn set_cursor(&mut self, cursor: &'static str);
    /// Debug readout of the scene coordinate under the pointer.
    fn show_coordinates(&mut self, text: &str, at: Point);
    fn hide_coordinates(&mut self);
}

/// Redraw the whole scene: replace entities, then apply the translation.
pub fn draw<S: DrawSurface + ?Sized>(surface: &mut S, visuals: &[EntityVisual], offset: Point) {
    surface.clear_entities();
    for visual in visuals {
        surface.place_entity(visual);
    }
    surface.set_translation(offset, &translate_css(offset));
}
