//! The capability set shared by every markup shape, and the tagged union
//! over the concrete variants.
//!
//! A shape owns typed geometry plus a [`Style`], and composes a [`Drawable`]
//! that it keeps in sync: style setters and geometry mutators push their
//! values into the drawable's props and refresh its coordinate cache. The
//! provided trait methods cover everything that is identical across shapes
//! (style setters, record conversion, cache refresh); each variant supplies
//! its geometry-specific parts.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde_json::Value;

use crate::circle::CircleShape;
use crate::config::MarkupConfig;
use crate::drawable::Drawable;
use crate::geometry::{Bounds, Point};
use crate::polyline::PolylineShape;
use crate::record::{RecordError, ShapeKind, ShapeRecord};
use crate::rectangle::RectangleShape;
use crate::style::{Style, StyleUpdate};

/// Behaviour every markup shape provides.
pub trait MarkupShape {
    /// Fixed discriminant of this shape type.
    fn kind(&self) -> ShapeKind;

    /// Current style.
    fn style(&self) -> &Style;

    /// Mutable style. Callers outside the crate should prefer [`MarkupShape::set_style`],
    /// which also updates the drawable.
    fn style_mut(&mut self) -> &mut Style;

    /// The host drawable this shape renders through.
    fn drawable(&self) -> &Drawable;

    fn drawable_mut(&mut self) -> &mut Drawable;

    /// Axis-aligned bounding box of the geometry.
    fn bounds(&self) -> Bounds;

    /// Typed serialized form.
    fn to_record(&self) -> ShapeRecord;

    /// Whether `pt` hits the shape, allowing `tolerance` pixels of slop.
    fn contains_point(&self, pt: Point, tolerance: f64) -> bool;

    /// Wire name of the shape type, e.g. `"rectangleShape"`.
    fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Apply the present fields of `update`; absent fields are left as they are.
    fn set_style(&mut self, update: &StyleUpdate) {
        if update.is_empty() {
            return;
        }
        if self.style_mut().apply(update) {
            let style = self.get_style();
            sync_style(self.drawable_mut(), &style);
        }
    }

    fn set_stroke(&mut self, color: &str) {
        self.set_style(&StyleUpdate::stroke(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.set_style(&StyleUpdate::stroke_width(width));
    }

    fn set_fill(&mut self, color: &str) {
        self.set_style(&StyleUpdate::fill(color));
    }

    /// Owned copy of the current style.
    fn get_style(&self) -> Style {
        self.style().clone()
    }

    fn get_bounds(&self) -> Bounds {
        self.bounds()
    }

    /// Recompute the drawable's cached coordinates from the current geometry.
    fn set_coords(&mut self) {
        let bounds = self.bounds();
        self.drawable_mut().set_coords(bounds);
    }

    /// Plain JSON record containing `type`, geometry, and style.
    fn to_object(&self) -> Value {
        self.to_record().to_value()
    }
}

/// Push every style field into a drawable's props.
pub(crate) fn sync_style(drawable: &mut Drawable, style: &Style) {
    drawable.set("stroke", style.stroke.as_str());
    drawable.set("strokeWidth", style.stroke_width);
    drawable.set("fill", style.fill.as_str());
}

/// Any markup shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(RectangleShape),
    Circle(CircleShape),
    Polyline(PolylineShape),
}

impl Shape {
    /// Rebuild a shape of whatever kind the record's `type` names.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] when the record is missing its discriminant,
    /// names an unknown type, or does not carry valid geometry for that type.
    pub fn from_object(value: &Value) -> Result<Self, RecordError> {
        let record = ShapeRecord::from_value(value).inspect_err(|e| {
            tracing::debug!(error = %e, "shape record rejected");
        })?;
        Self::from_record(record)
    }

    /// Rebuild a shape from an already-parsed record.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] when the geometry is invalid for the record's type.
    pub fn from_record(record: ShapeRecord) -> Result<Self, RecordError> {
        let kind = record.kind();
        let shape = match record {
            ShapeRecord::Rectangle(r) => RectangleShape::from_record(r).map(Self::Rectangle),
            ShapeRecord::Circle(r) => Ok(Self::Circle(CircleShape::from_record(r))),
            ShapeRecord::Polyline(r) => PolylineShape::from_record(r).map(Self::Polyline),
        };
        shape.inspect_err(|e| {
            tracing::debug!(%kind, error = %e, "shape record rejected");
        })
    }

    /// Hit-test using the configured tolerance.
    #[must_use]
    pub fn hit_test(&self, pt: Point, config: &MarkupConfig) -> bool {
        self.contains_point(pt, config.hit_tolerance)
    }

    #[must_use]
    pub fn as_rectangle(&self) -> Option<&RectangleShape> {
        match self {
            Self::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_circle(&self) -> Option<&CircleShape> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_polyline(&self) -> Option<&PolylineShape> {
        match self {
            Self::Polyline(p) => Some(p),
            _ => None,
        }
    }
}

impl MarkupShape for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(s) => s.kind(),
            Self::Circle(s) => s.kind(),
            Self::Polyline(s) => s.kind(),
        }
    }

    fn style(&self) -> &Style {
        match self {
            Self::Rectangle(s) => s.style(),
            Self::Circle(s) => s.style(),
            Self::Polyline(s) => s.style(),
        }
    }

    fn style_mut(&mut self) -> &mut Style {
        match self {
            Self::Rectangle(s) => s.style_mut(),
            Self::Circle(s) => s.style_mut(),
            Self::Polyline(s) => s.style_mut(),
        }
    }

    fn drawable(&self) -> &Drawable {
        match self {
            Self::Rectangle(s) => s.drawable(),
            Self::Circle(s) => s.drawable(),
            Self::Polyline(s) => s.drawable(),
        }
    }

    fn drawable_mut(&mut self) -> &mut Drawable {
        match self {
            Self::Rectangle(s) => s.drawable_mut(),
            Self::Circle(s) => s.drawable_mut(),
            Self::Polyline(s) => s.drawable_mut(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Self::Rectangle(s) => s.bounds(),
            Self::Circle(s) => s.bounds(),
            Self::Polyline(s) => s.bounds(),
        }
    }

    fn to_record(&self) -> ShapeRecord {
        match self {
            Self::Rectangle(s) => s.to_record(),
            Self::Circle(s) => s.to_record(),
            Self::Polyline(s) => s.to_record(),
        }
    }

    fn contains_point(&self, pt: Point, tolerance: f64) -> bool {
        match self {
            Self::Rectangle(s) => s.contains_point(pt, tolerance),
            Self::Circle(s) => s.contains_point(pt, tolerance),
            Self::Polyline(s) => s.contains_point(pt, tolerance),
        }
    }
}

impl From<RectangleShape> for Shape {
    fn from(shape: RectangleShape) -> Self {
        Self::Rectangle(shape)
    }
}

impl From<CircleShape> for Shape {
    fn from(shape: CircleShape) -> Self {
        Self::Circle(shape)
    }
}

impl From<PolylineShape> for Shape {
    fn from(shape: PolylineShape) -> Self {
        Self::Polyline(shape)
    }
}
