//! Stateless geometry shared by the shape types and their factories.
//!
//! Drag gestures arrive as two arbitrary points; everything here normalizes
//! them so the result does not depend on which corner the drag started from.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Normalized box derived from a drag gesture: top-left corner plus
/// non-negative extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Min/max over every point. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self { left: first.x, top: first.y, right: first.x, bottom: first.y };
        for p in rest {
            bounds.left = bounds.left.min(p.x);
            bounds.top = bounds.top.min(p.y);
            bounds.right = bounds.right.max(p.x);
            bounds.bottom = bounds.bottom.max(p.y);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Grow every side outward by `amount`.
    #[must_use]
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            left: self.left - amount,
            top: self.top - amount,
            right: self.right + amount,
            bottom: self.bottom + amount,
        }
    }

    /// Whether `pt` lies inside or on the edge of the box.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.right && pt.y >= self.top && pt.y <= self.bottom
    }
}

/// Normalize a drag between `p1` and `p2` into a top-left box.
///
/// Correct for all four drag directions: the left/top edge is always the
/// minimum coordinate and the extents are absolute differences.
#[must_use]
pub fn normalize_drag_rect(p1: Point, p2: Point) -> DragRect {
    DragRect {
        left: p1.x.min(p2.x),
        top: p1.y.min(p2.y),
        width: (p2.x - p1.x).abs(),
        height: (p2.y - p1.y).abs(),
    }
}

/// Midpoint of `p1` and `p2`.
#[must_use]
pub fn center(p1: Point, p2: Point) -> Point {
    Point { x: (p1.x + p2.x) / 2.0, y: (p1.y + p2.y) / 2.0 }
}

/// Shortest distance from `pt` to the segment `a`–`b`.
#[must_use]
pub fn distance_to_segment(pt: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return pt.distance(a);
    }
    let t = (((pt.x - a.x) * dx + (pt.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    pt.distance(Point::new(a.x + t * dx, a.y + t * dy))
}
