//! Axis-aligned rectangle markup.

#[cfg(test)]
#[path = "rectangle_test.rs"]
mod rectangle_test;

use serde_json::Value;

use crate::drawable::Drawable;
use crate::geometry::{Bounds, Point, normalize_drag_rect};
use crate::record::{RecordError, RectangleRecord, ShapeKind, ShapeRecord};
use crate::shape::{MarkupShape, sync_style};
use crate::style::{RECTANGLE_DEFAULT_STYLE, Style, StyleUpdate};

/// Rectangle defined by its top-left corner and extents.
///
/// Extents are not re-validated after construction; `set_dimensions` accepts
/// any value and leaves tolerance of odd sizes to the renderer.
#[derive(Debug, Clone)]
pub struct RectangleShape {
    position_x: f64,
    position_y: f64,
    width: f64,
    height: f64,
    style: Style,
    drawable: Drawable,
}

impl RectangleShape {
    /// Create a rectangle at (`x`, `y`) with the given extents. `options` is
    /// merged over [`RECTANGLE_DEFAULT_STYLE`].
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, options: &StyleUpdate) -> Self {
        let mut shape = Self {
            position_x: x,
            position_y: y,
            width,
            height,
            style: Style::merged(&RECTANGLE_DEFAULT_STYLE, options),
            drawable: Drawable::new(),
        };
        sync_style(&mut shape.drawable, &shape.style);
        shape.apply_geometry();
        shape
    }

    /// Restore from a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::WrongType`] for a record of another shape, or any
    /// error from [`RectangleShape::from_record`].
    pub fn from_object(value: &Value) -> Result<Self, RecordError> {
        match ShapeRecord::from_value(value)? {
            ShapeRecord::Rectangle(r) => Self::from_record(r),
            other => Err(RecordError::WrongType { expected: ShapeKind::Rectangle, found: other.kind() }),
        }
    }

    /// Restore from a parsed record. Missing style fields fall back to the
    /// rectangle defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] when the record has neither
    /// `left`/`top` nor the legacy `positionX`/`positionY`.
    pub fn from_record(record: RectangleRecord) -> Result<Self, RecordError> {
        let pos = record.position()?;
        Ok(Self::new(pos.x, pos.y, record.width, record.height, &record.style))
    }

    #[must_use]
    pub fn position_x(&self) -> f64 {
        self.position_x
    }

    #[must_use]
    pub fn position_y(&self) -> f64 {
        self.position_y
    }

    #[must_use]
    pub fn shape_width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn shape_height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn get_width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn get_height(&self) -> f64 {
        self.height
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position_x = x;
        self.position_y = y;
        self.apply_geometry();
    }

    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.apply_geometry();
    }

    /// Re-derive position and extents from a drag between `p1` and `p2`.
    pub fn update_from_drag(&mut self, p1: Point, p2: Point) {
        let r = normalize_drag_rect(p1, p2);
        self.position_x = r.left;
        self.position_y = r.top;
        self.width = r.width;
        self.height = r.height;
        self.apply_geometry();
    }

    fn apply_geometry(&mut self) {
        self.drawable.set("left", self.position_x);
        self.drawable.set("top", self.position_y);
        self.drawable.set("width", self.width);
        self.drawable.set("height", self.height);
        self.set_coords();
    }
}

impl MarkupShape for RectangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn drawable(&self) -> &Drawable {
        &self.drawable
    }

    fn drawable_mut(&mut self) -> &mut Drawable {
        &mut self.drawable
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.position_x,
            top: self.position_y,
            right: self.position_x + self.width,
            bottom: self.position_y + self.height,
        }
    }

    fn to_record(&self) -> ShapeRecord {
        ShapeRecord::Rectangle(RectangleRecord {
            left: Some(self.position_x),
            top: Some(self.position_y),
            position_x: None,
            position_y: None,
            width: self.width,
            height: self.height,
            style: StyleUpdate::from(&self.style),
        })
    }

    fn contains_point(&self, pt: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance).contains(pt)
    }
}

/// Geometry and style equality; drawable cache state is ignored.
impl PartialEq for RectangleShape {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.position_x == other.position_x
            && self.position_y == other.position_y
            && self.width == other.width
            && self.height == other.height
            && self.style == other.style
    }
}
