//! Serialized shape records: the JSON contract for saving and loading markup.
//!
//! Every record carries a `type` discriminant plus the style and geometry
//! needed to rebuild the shape. Field names are camelCase on the wire. Older
//! stored documents may carry host placement fields (`left`/`top`) or legacy
//! rectangle keys (`positionX`/`positionY`); both are accepted on read.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::Point;
use crate::style::StyleUpdate;

/// Error returned when a record cannot be turned back into a shape.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The record has no usable `type` string or lacks a required geometry field.
    #[error("record is missing field `{0}`")]
    MissingField(&'static str),
    /// The `type` discriminant names no known shape.
    #[error("unknown shape type: {0}")]
    UnknownType(String),
    /// The record is for a different shape than the one being restored.
    #[error("expected a {expected} record, found {found}")]
    WrongType { expected: ShapeKind, found: ShapeKind },
    /// A polyline record has fewer vertices than an open polyline needs.
    #[error("polyline record has {0} points, need at least 2")]
    TooFewPoints(usize),
    /// A polyline record is marked closed; only open polylines exist here.
    #[error("polyline record is closed, only open polylines are supported")]
    ClosedPolyline,
    /// The record is structurally invalid (bad field types, not an object, ...).
    #[error("malformed shape record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Discriminant written to the `type` field of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[serde(rename = "rectangleShape")]
    Rectangle,
    #[serde(rename = "circleShape")]
    Circle,
    #[serde(rename = "polylineShape")]
    Polyline,
}

impl ShapeKind {
    /// Wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangleShape",
            Self::Circle => "circleShape",
            Self::Polyline => "polylineShape",
        }
    }

    /// Parse a wire name. `None` for anything unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "rectangleShape" => Some(Self::Rectangle),
            "circleShape" => Some(Self::Circle),
            "polylineShape" => Some(Self::Polyline),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rectangle geometry on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Legacy position key, read only.
    #[serde(default, skip_serializing)]
    pub position_x: Option<f64>,
    /// Legacy position key, read only.
    #[serde(default, skip_serializing)]
    pub position_y: Option<f64>,
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub style: StyleUpdate,
}

impl RectangleRecord {
    /// Top-left corner, preferring `left`/`top` over the legacy keys.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] when neither form is present.
    pub fn position(&self) -> Result<Point, RecordError> {
        let x = self.left.or(self.position_x).ok_or(RecordError::MissingField("left"))?;
        let y = self.top.or(self.position_y).ok_or(RecordError::MissingField("top"))?;
        Ok(Point::new(x, y))
    }
}

/// Circle/ellipse geometry on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleRecord {
    pub center_x: f64,
    pub center_y: f64,
    pub rx: f64,
    pub ry: f64,
    /// Host placement; accepted but not used for geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Host placement; accepted but not used for geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(flatten)]
    pub style: StyleUpdate,
}

/// Polyline geometry on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineRecord {
    pub points: Vec<Point>,
    /// Always written as `false`. `true` is rejected on restore.
    #[serde(default)]
    pub is_closed: bool,
    /// Host placement; accepted but geometry always comes from `points`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Host placement; accepted but geometry always comes from `points`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(flatten)]
    pub style: StyleUpdate,
}

/// A serialized shape of any kind, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeRecord {
    #[serde(rename = "rectangleShape")]
    Rectangle(RectangleRecord),
    #[serde(rename = "circleShape")]
    Circle(CircleRecord),
    #[serde(rename = "polylineShape")]
    Polyline(PolylineRecord),
}

impl ShapeRecord {
    /// Kind of shape this record describes.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Polyline(_) => ShapeKind::Polyline,
        }
    }

    /// Parse a record from a plain JSON value.
    ///
    /// The discriminant is checked first so that a missing or unknown `type`
    /// is reported as such rather than as a generic decode failure.
    ///
    /// # Errors
    ///
    /// - [`RecordError::MissingField`] if `type` is absent or not a string.
    /// - [`RecordError::UnknownType`] if `type` names no known shape.
    /// - [`RecordError::Malformed`] if the geometry or style fields do not decode.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let raw = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingField("type"))?;
        if ShapeKind::parse(raw).is_none() {
            return Err(RecordError::UnknownType(raw.to_owned()));
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Convert to a plain JSON value.
    ///
    /// Records hold only string-keyed fields, so encoding does not fail in
    /// practice; a failure is logged and yields `null`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match serde_json::to_value(self) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(kind = %self.kind(), error = %e, "shape record failed to encode");
                Value::Null
            }
        }
    }
}
