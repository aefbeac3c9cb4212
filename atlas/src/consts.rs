//! Shared constants for the atlas crate.

// ── Textures ────────────────────────────────────────────────────

/// Number of planet surface textures shipped under `img/textures/`.
pub const TEXTURE_COUNT: u32 = 34;

/// Edge length of one texture tile in CSS pixels.
pub const TEXTURE_TILE_PX: f64 = 128.0;

// ── Paint ───────────────────────────────────────────────────────

/// Fill used for planets that have not been revealed yet.
pub const UNKNOWN_FILL: &str = "var(--unknown-color)";

/// Border width for planets carrying an anchor.
pub const ANCHOR_BORDER_PX: f64 = 2.0;

/// Edge length of the square marker pin.
pub const MARKER_SIZE_PX: f64 = 16.0;

/// Glyph drawn inside a marker pin.
pub const MARKER_GLYPH_COLOR: &str = "#fff";
pub const MARKER_GLYPH_PX: f64 = 10.0;

// ── Overlays ────────────────────────────────────────────────────

/// Tooltip and debug readout sit this far right of and below the pointer.
pub const POINTER_LABEL_OFFSET_PX: f64 = 10.0;

/// Tooltip text shown in place of an unknown planet's name.
pub const REDACTED_LABEL: &str = "???";

/// Cursor while the scene can be grabbed.
pub const CURSOR_GRAB: &str = "var(--cursor-grab)";

/// Cursor while the scene is being dragged.
pub const CURSOR_GRABBING: &str = "var(--cursor-grabbing)";

// ── Layout ──────────────────────────────────────────────────────

/// Default minimum scene edge length; entity extents can only grow it.
pub const DEFAULT_SCENE_EDGE_PX: f64 = 2000.0;

// ── Authoring ───────────────────────────────────────────────────

/// Smallest radius handed to a freshly authored planet.
pub const AUTHORED_RADIUS_MIN: u32 = 12;

/// Largest radius handed to a freshly authored planet.
pub const AUTHORED_RADIUS_MAX: u32 = 35;
