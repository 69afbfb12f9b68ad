//! Circle and ellipse markup.
//!
//! A single shape covers both: it is a circle while the two radii are equal
//! and an ellipse otherwise. The classification is computed on every read, so
//! it always reflects the current radii.

#[cfg(test)]
#[path = "circle_test.rs"]
mod circle_test;

use serde_json::Value;

use crate::drawable::Drawable;
use crate::geometry::{Bounds, Point, center, normalize_drag_rect};
use crate::record::{CircleRecord, RecordError, ShapeKind, ShapeRecord};
use crate::shape::{MarkupShape, sync_style};
use crate::style::{CIRCLE_DEFAULT_STYLE, Style, StyleUpdate};

/// Ellipse defined by its center and independent x/y radii.
#[derive(Debug, Clone)]
pub struct CircleShape {
    center_x: f64,
    center_y: f64,
    rx: f64,
    ry: f64,
    style: Style,
    drawable: Drawable,
}

impl CircleShape {
    /// Create an ellipse centered on (`cx`, `cy`). `options` is merged over
    /// [`CIRCLE_DEFAULT_STYLE`].
    #[must_use]
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64, options: &StyleUpdate) -> Self {
        let mut shape = Self {
            center_x: cx,
            center_y: cy,
            rx,
            ry,
            style: Style::merged(&CIRCLE_DEFAULT_STYLE, options),
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
    /// Returns [`RecordError::WrongType`] for a record of another shape, or the
    /// parse error when the record is malformed.
    pub fn from_object(value: &Value) -> Result<Self, RecordError> {
        match ShapeRecord::from_value(value)? {
            ShapeRecord::Circle(r) => Ok(Self::from_record(r)),
            other => Err(RecordError::WrongType { expected: ShapeKind::Circle, found: other.kind() }),
        }
    }

    /// Restore from a parsed record. Placement fields are ignored; missing
    /// style fields fall back to the circle defaults.
    #[must_use]
    pub fn from_record(record: CircleRecord) -> Self {
        Self::new(record.center_x, record.center_y, record.rx, record.ry, &record.style)
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn rx(&self) -> f64 {
        self.rx
    }

    #[must_use]
    pub fn ry(&self) -> f64 {
        self.ry
    }

    /// Full horizontal extent (`rx * 2`).
    #[must_use]
    pub fn shape_width(&self) -> f64 {
        self.rx * 2.0
    }

    /// Full vertical extent (`ry * 2`).
    #[must_use]
    pub fn shape_height(&self) -> f64 {
        self.ry * 2.0
    }

    #[must_use]
    pub fn get_width(&self) -> f64 {
        self.shape_width()
    }

    #[must_use]
    pub fn get_height(&self) -> f64 {
        self.shape_height()
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_circle(&self) -> bool {
        self.rx == self.ry
    }

    #[must_use]
    pub fn is_ellipse(&self) -> bool {
        !self.is_circle()
    }

    pub fn set_center(&mut self, cx: f64, cy: f64) {
        self.center_x = cx;
        self.center_y = cy;
        self.apply_geometry();
    }

    pub fn set_radii(&mut self, rx: f64, ry: f64) {
        self.rx = rx;
        self.ry = ry;
        self.apply_geometry();
    }

    /// Fit the ellipse inside the box spanned by a drag from `p1` to `p2`.
    pub fn update_from_drag(&mut self, p1: Point, p2: Point) {
        let r = normalize_drag_rect(p1, p2);
        let c = center(p1, p2);
        self.center_x = c.x;
        self.center_y = c.y;
        self.rx = r.width / 2.0;
        self.ry = r.height / 2.0;
        self.apply_geometry();
    }

    fn apply_geometry(&mut self) {
        self.drawable.set("left", self.center_x - self.rx);
        self.drawable.set("top", self.center_y - self.ry);
        self.drawable.set("width", self.shape_width());
        self.drawable.set("height", self.shape_height());
        self.drawable.set("rx", self.rx);
        self.drawable.set("ry", self.ry);
        self.set_coords();
    }
}

impl MarkupShape for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
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
            left: self.center_x - self.rx,
            top: self.center_y - self.ry,
            right: self.center_x + self.rx,
            bottom: self.center_y + self.ry,
        }
    }

    fn to_record(&self) -> ShapeRecord {
        ShapeRecord::Circle(CircleRecord {
            center_x: self.center_x,
            center_y: self.center_y,
            rx: self.rx,
            ry: self.ry,
            left: None,
            top: None,
            style: StyleUpdate::from(&self.style),
        })
    }

    fn contains_point(&self, pt: Point, tolerance: f64) -> bool {
        let rx = self.rx + tolerance;
        let ry = self.ry + tolerance;
        if rx <= 0.0 || ry <= 0.0 {
            return self.bounds().inflate(tolerance).contains(pt);
        }
        let nx = (pt.x - self.center_x) / rx;
        let ny = (pt.y - self.center_y) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

/// Geometry and style equality; drawable cache state is ignored.
impl PartialEq for CircleShape {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.center_x == other.center_x
            && self.center_y == other.center_y
            && self.rx == other.rx
            && self.ry == other.ry
            && self.style == other.style
    }
}
