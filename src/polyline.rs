//! Open polyline markup.
//!
//! The first and last vertices are never joined. Vertex lists are copied on
//! the way in and on the way out, so callers never share storage with a live
//! shape.

#[cfg(test)]
#[path = "polyline_test.rs"]
mod polyline_test;

use serde_json::{Value, json};

use crate::consts::MIN_POLYLINE_POINTS;
use crate::drawable::Drawable;
use crate::geometry::{Bounds, Point, distance_to_segment};
use crate::record::{PolylineRecord, RecordError, ShapeKind, ShapeRecord};
use crate::shape::{MarkupShape, sync_style};
use crate::style::{POLYLINE_DEFAULT_STYLE, Style, StyleUpdate};

/// Ordered list of vertices drawn as connected segments.
#[derive(Debug, Clone)]
pub struct PolylineShape {
    points: Vec<Point>,
    style: Style,
    drawable: Drawable,
}

impl PolylineShape {
    /// Create a polyline from a copy of `points`. `options` is merged over
    /// [`POLYLINE_DEFAULT_STYLE`].
    ///
    /// Returns `None` for fewer than [`MIN_POLYLINE_POINTS`] vertices.
    #[must_use]
    pub fn new(points: &[Point], options: &StyleUpdate) -> Option<Self> {
        if points.len() < MIN_POLYLINE_POINTS {
            tracing::debug!(points = points.len(), "polyline rejected: too few points");
            return None;
        }
        let mut shape = Self {
            points: points.to_vec(),
            style: Style::merged(&POLYLINE_DEFAULT_STYLE, options),
            drawable: Drawable::new(),
        };
        sync_style(&mut shape.drawable, &shape.style);
        shape.apply_geometry();
        Some(shape)
    }

    /// Restore from a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::WrongType`] for a record of another shape, or any
    /// error from [`PolylineShape::from_record`].
    pub fn from_object(value: &Value) -> Result<Self, RecordError> {
        match ShapeRecord::from_value(value)? {
            ShapeRecord::Polyline(r) => Self::from_record(r),
            other => Err(RecordError::WrongType { expected: ShapeKind::Polyline, found: other.kind() }),
        }
    }

    /// Restore from a parsed record.
    ///
    /// Geometry comes from `points`. Stored `left`/`top` placement is applied
    /// to the drawable first and then superseded by the vertex bounds when the
    /// coordinate cache is rebuilt.
    ///
    /// # Errors
    ///
    /// - [`RecordError::TooFewPoints`] when the record has fewer than two vertices.
    /// - [`RecordError::ClosedPolyline`] when the record is marked `isClosed`.
    pub fn from_record(record: PolylineRecord) -> Result<Self, RecordError> {
        if record.points.len() < MIN_POLYLINE_POINTS {
            return Err(RecordError::TooFewPoints(record.points.len()));
        }
        if record.is_closed {
            return Err(RecordError::ClosedPolyline);
        }
        let mut shape = Self {
            points: record.points,
            style: Style::merged(&POLYLINE_DEFAULT_STYLE, &record.style),
            drawable: Drawable::new(),
        };
        sync_style(&mut shape.drawable, &shape.style);
        if let Some(left) = record.left {
            shape.drawable.set("left", left);
        }
        if let Some(top) = record.top {
            shape.drawable.set("top", top);
        }
        shape.apply_geometry();
        Ok(shape)
    }

    /// Always `false`: a polyline's ends are never joined.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        false
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Copy of the vertex at `index`, or `None` when out of range.
    #[must_use]
    pub fn get_point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Copy of the full vertex list.
    #[must_use]
    pub fn get_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    /// Move the vertex at `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` if a vertex was moved.
    pub fn set_point(&mut self, index: usize, point: Point) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            tracing::debug!(index, len = self.points.len(), "set_point ignored: index out of range");
            return false;
        };
        *slot = point;
        self.apply_geometry();
        true
    }

    /// Replace every vertex with a copy of `points`. Lists shorter than
    /// [`MIN_POLYLINE_POINTS`] are ignored.
    ///
    /// Returns `true` if the vertices were replaced.
    pub fn set_points(&mut self, points: &[Point]) -> bool {
        if points.len() < MIN_POLYLINE_POINTS {
            tracing::debug!(points = points.len(), "set_points ignored: too few points");
            return false;
        }
        self.points = points.to_vec();
        self.apply_geometry();
        true
    }

    fn apply_geometry(&mut self) {
        let bounds = self.bounds();
        self.drawable.set("left", bounds.left);
        self.drawable.set("top", bounds.top);
        self.drawable.set("width", bounds.width());
        self.drawable.set("height", bounds.height());
        let points: Vec<Value> = self.points.iter().map(|p| json!({"x": p.x, "y": p.y})).collect();
        self.drawable.set("points", points);
        self.set_coords();
    }
}

impl MarkupShape for PolylineShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polyline
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

    /// Min/max over all vertices.
    fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.points).unwrap_or_default()
    }

    fn to_record(&self) -> ShapeRecord {
        let bounds = self.bounds();
        ShapeRecord::Polyline(PolylineRecord {
            points: self.points.clone(),
            is_closed: false,
            left: Some(bounds.left),
            top: Some(bounds.top),
            style: StyleUpdate::from(&self.style),
        })
    }

    fn contains_point(&self, pt: Point, tolerance: f64) -> bool {
        let reach = tolerance + self.style.stroke_width / 2.0;
        match self.points.as_slice() {
            [] => false,
            [only] => only.distance(pt) <= reach,
            points => points.windows(2).any(|seg| distance_to_segment(pt, seg[0], seg[1]) <= reach),
        }
    }
}

/// Vertex and style equality; drawable cache state is ignored.
impl PartialEq for PolylineShape {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.style == other.style
    }
}
