//! Shape annotation primitives for marking up site survey photographs.
//!
//! This crate owns the geometry, style, and serialization rules for the
//! freehand markup drawn over survey photos: rectangles, circles/ellipses, and
//! open polylines. It is independent of any UI framework. The host canvas layer
//! wires pointer events to the factory functions (drag gestures) or to a
//! [`builder::PolylineBuilder`] (click-to-add-point), adds the resulting shapes
//! to its scene, and persists them through [`shape::MarkupShape::to_object`] /
//! [`shape::Shape::from_object`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, drag normalization, centers, bounding boxes |
//! | [`style`] | Stroke/fill style, partial updates, per-shape defaults |
//! | [`drawable`] | Host drawable primitive: props bag and coordinate cache |
//! | [`shape`] | The `MarkupShape` capability trait and the `Shape` union |
//! | [`rectangle`] | Axis-aligned rectangle |
//! | [`circle`] | Circle / ellipse |
//! | [`polyline`] | Open multi-point line |
//! | [`builder`] | Incremental polyline construction |
//! | [`factory`] | Drag-to-shape and points-to-shape constructors |
//! | [`record`] | Serialized record types and restore errors |
//! | [`config`] | Size threshold and hit tolerance settings |
//! | [`consts`] | Shared numeric constants |

pub mod builder;
pub mod circle;
pub mod config;
pub mod consts;
pub mod drawable;
pub mod factory;
pub mod geometry;
pub mod polyline;
pub mod record;
pub mod rectangle;
pub mod shape;
pub mod style;

pub use builder::{BuilderState, PolylineBuilder};
pub use circle::CircleShape;
pub use config::{ConfigError, MarkupConfig};
pub use factory::{create_circle, create_circle_with, create_polyline, create_rectangle, create_rectangle_with};
pub use geometry::{Bounds, DragRect, Point};
pub use polyline::PolylineShape;
pub use record::{RecordError, ShapeKind, ShapeRecord};
pub use rectangle::RectangleShape;
pub use shape::{MarkupShape, Shape};
pub use style::{Style, StyleDefaults, StyleUpdate};
