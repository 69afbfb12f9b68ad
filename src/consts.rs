//! Shared numeric constants for the markup crate.

// ── Creation thresholds ─────────────────────────────────────────

/// Smallest accepted width or height, in canvas pixels, for a dragged
/// rectangle or circle bounding box.
pub const MIN_SHAPE_SIZE: f64 = 5.0;

/// Fewest vertices an open polyline may have.
pub const MIN_POLYLINE_POINTS: usize = 2;

// ── Hit-testing ─────────────────────────────────────────────────

/// Default slop in canvas pixels when testing a point against a shape.
pub const HIT_TOLERANCE_PX: f64 = 4.0;

// ── Style ───────────────────────────────────────────────────────

/// Stroke color shared by every default style.
pub const DEFAULT_STROKE: &str = "#000000";

/// Stroke width shared by every default style.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Fill shared by every default style.
pub const DEFAULT_FILL: &str = "transparent";
