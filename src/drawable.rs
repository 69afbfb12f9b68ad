//! Host drawable primitive that every markup shape composes.
//!
//! The scene graph that renders and hit-tests objects only sees a `Drawable`:
//! an open-ended `props` JSON bag (placement, extents, stroke, fill), the
//! interaction flags its selection handles honour, and a cache of corner
//! coordinates that must be refreshed with [`Drawable::set_coords`] after
//! every geometry change. Shapes own their typed geometry and push it down
//! here so the renderer stays in sync.

#[cfg(test)]
#[path = "drawable_test.rs"]
mod drawable_test;

use serde_json::{Map, Value};

use crate::geometry::{Bounds, Point};

/// Cached corner coordinates of a drawable, used for rendering and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub tl: Point,
    pub tr: Point,
    pub br: Point,
    pub bl: Point,
}

impl Coords {
    #[must_use]
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            tl: Point::new(bounds.left, bounds.top),
            tr: Point::new(bounds.right, bounds.top),
            br: Point::new(bounds.right, bounds.bottom),
            bl: Point::new(bounds.left, bounds.bottom),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds { left: self.tl.x, top: self.tl.y, right: self.br.x, bottom: self.br.y }
    }
}

/// A retained-mode scene object.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    props: Map<String, Value>,
    coords: Option<Coords>,
    coords_refreshes: u64,
    /// Scaling/rotation handles are shown when selected.
    pub has_controls: bool,
    /// Selection border is shown when selected.
    pub has_borders: bool,
    /// Horizontal dragging is disabled.
    pub lock_movement_x: bool,
    /// Vertical dragging is disabled.
    pub lock_movement_y: bool,
}

impl Default for Drawable {
    fn default() -> Self {
        Self {
            props: Map::new(),
            coords: None,
            coords_refreshes: 0,
            has_controls: true,
            has_borders: true,
            lock_movement_x: false,
            lock_movement_y: false,
        }
    }
}

impl Drawable {
    /// Create an empty drawable with selectable, movable, resizable defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single prop, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.props.insert(key.to_owned(), value.into());
    }

    /// Merge a JSON object into the props. `null` values delete keys.
    ///
    /// Returns `false` without touching anything if `props` is not an object.
    pub fn set_props(&mut self, props: &Value) -> bool {
        let Some(incoming) = props.as_object() else {
            return false;
        };
        for (k, v) in incoming {
            if v.is_null() {
                self.props.remove(k);
            } else {
                self.props.insert(k.clone(), v.clone());
            }
        }
        true
    }

    /// Raw prop value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Numeric prop by key. `None` when absent or not a number.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.props.get(key).and_then(Value::as_f64)
    }

    /// String prop by key. `None` when absent or not a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    /// Recompute the cached corner coordinates from `bounds`.
    pub fn set_coords(&mut self, bounds: Bounds) {
        self.coords = Some(Coords::from_bounds(bounds));
        self.coords_refreshes += 1;
        tracing::trace!(
            left = bounds.left,
            top = bounds.top,
            right = bounds.right,
            bottom = bounds.bottom,
            refreshes = self.coords_refreshes,
            "drawable coords refreshed"
        );
    }

    /// Cached corner coordinates, if `set_coords` has run.
    #[must_use]
    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }

    /// How many times the coordinate cache has been refreshed.
    #[must_use]
    pub fn coords_refreshes(&self) -> u64 {
        self.coords_refreshes
    }

    /// Box hit-test against the cached coordinates. Always `false` before the
    /// first refresh.
    #[must_use]
    pub fn contains_point(&self, pt: Point) -> bool {
        self.coords.is_some_and(|c| c.bounds().contains(pt))
    }

    /// Plain snapshot of the props plus the interaction flags.
    #[must_use]
    pub fn to_object(&self) -> Value {
        let mut out = self.props.clone();
        out.insert("hasControls".to_owned(), Value::Bool(self.has_controls));
        out.insert("hasBorders".to_owned(), Value::Bool(self.has_borders));
        out.insert("lockMovementX".to_owned(), Value::Bool(self.lock_movement_x));
        out.insert("lockMovementY".to_owned(), Value::Bool(self.lock_movement_y));
        Value::Object(out)
    }
}
