//! Constructors that turn raw gestures into shapes.
//!
//! Drag factories normalize the two pointer positions and refuse boxes that
//! are too small in either dimension, so an accidental click never leaves a
//! speck on the photo. The polyline factory refuses fewer than two vertices.
//! Every rejection is a `None`; callers check before adding to the scene.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use crate::circle::CircleShape;
use crate::config::MarkupConfig;
use crate::geometry::{DragRect, Point, center, normalize_drag_rect};
use crate::polyline::PolylineShape;
use crate::rectangle::RectangleShape;
use crate::style::StyleUpdate;

/// Rectangle spanning a drag from `start` to `end`, using default settings.
#[must_use]
pub fn create_rectangle(start: Point, end: Point, options: &StyleUpdate) -> Option<RectangleShape> {
    create_rectangle_with(&MarkupConfig::default(), start, end, options)
}

/// Rectangle spanning a drag from `start` to `end`.
///
/// Returns `None` when either side of the normalized box is below
/// `config.min_shape_size`.
#[must_use]
pub fn create_rectangle_with(
    config: &MarkupConfig,
    start: Point,
    end: Point,
    options: &StyleUpdate,
) -> Option<RectangleShape> {
    let r = sized_drag(config, "rectangle", start, end)?;
    Some(RectangleShape::new(r.left, r.top, r.width, r.height, options))
}

/// Ellipse inscribed in a drag from `start` to `end`, using default settings.
#[must_use]
pub fn create_circle(start: Point, end: Point, options: &StyleUpdate) -> Option<CircleShape> {
    create_circle_with(&MarkupConfig::default(), start, end, options)
}

/// Ellipse inscribed in the box of a drag from `start` to `end`.
///
/// Returns `None` when either side of the box is below `config.min_shape_size`.
#[must_use]
pub fn create_circle_with(
    config: &MarkupConfig,
    start: Point,
    end: Point,
    options: &StyleUpdate,
) -> Option<CircleShape> {
    let r = sized_drag(config, "circle", start, end)?;
    let c = center(start, end);
    Some(CircleShape::new(c.x, c.y, r.width / 2.0, r.height / 2.0, options))
}

/// Open polyline through `points`. Returns `None` for fewer than two points.
#[must_use]
pub fn create_polyline(points: &[Point], options: &StyleUpdate) -> Option<PolylineShape> {
    PolylineShape::new(points, options)
}

fn sized_drag(config: &MarkupConfig, shape: &'static str, start: Point, end: Point) -> Option<DragRect> {
    let r = normalize_drag_rect(start, end);
    if r.width < config.min_shape_size || r.height < config.min_shape_size {
        tracing::debug!(
            shape,
            width = r.width,
            height = r.height,
            min = config.min_shape_size,
            "drag rejected: below minimum size"
        );
        return None;
    }
    Some(r)
}
