//! Click-to-add-point construction of polylines.
//!
//! The builder has two states keyed off the vertex count: it accumulates until
//! it holds two points, after which it can be finished. `finish` does not
//! clear the builder, so a UI can keep previewing the same points; callers that
//! are done with the gesture use `into_shape` or drop the builder.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use crate::consts::MIN_POLYLINE_POINTS;
use crate::factory::create_polyline;
use crate::geometry::Point;
use crate::polyline::PolylineShape;
use crate::style::StyleUpdate;

/// Where the builder is in its gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Fewer than two points so far; `finish` yields nothing.
    Accumulating,
    /// Two or more points; `finish` yields a polyline.
    ReadyToFinish,
}

/// Accumulates polyline vertices one at a time.
#[derive(Debug, Clone, Default)]
pub struct PolylineBuilder {
    points: Vec<Point>,
    options: StyleUpdate,
}

impl PolylineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose finished shapes use `options` over the polyline defaults.
    #[must_use]
    pub fn with_style(options: StyleUpdate) -> Self {
        Self { points: Vec::new(), options }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Drop the most recent point. No-op when empty.
    pub fn remove_last_point(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Copy of the accumulated points.
    #[must_use]
    pub fn get_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn can_finish(&self) -> bool {
        self.points.len() >= MIN_POLYLINE_POINTS
    }

    #[must_use]
    pub fn state(&self) -> BuilderState {
        if self.can_finish() { BuilderState::ReadyToFinish } else { BuilderState::Accumulating }
    }

    /// Build a polyline from the current points, leaving the builder as is.
    #[must_use]
    pub fn finish(&self) -> Option<PolylineShape> {
        create_polyline(&self.points, &self.options)
    }

    /// Build a polyline and consume the builder.
    #[must_use]
    pub fn into_shape(self) -> Option<PolylineShape> {
        self.finish()
    }
}
