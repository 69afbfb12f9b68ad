//! Stroke and fill styling for markup shapes.
//!
//! `Style` is the full, owned style of a live shape. `StyleUpdate` is the
//! sparse form used for construction options and setters: only present fields
//! are applied, absent ones keep their current value. `StyleDefaults` is the
//! `const` form used for the per-shape default constants.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FILL, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH};

/// Compile-time style values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDefaults {
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub fill: &'static str,
}

/// Default style for rectangles.
pub const RECTANGLE_DEFAULT_STYLE: StyleDefaults =
    StyleDefaults { stroke: DEFAULT_STROKE, stroke_width: DEFAULT_STROKE_WIDTH, fill: DEFAULT_FILL };

/// Default style for circles and ellipses.
pub const CIRCLE_DEFAULT_STYLE: StyleDefaults =
    StyleDefaults { stroke: DEFAULT_STROKE, stroke_width: DEFAULT_STROKE_WIDTH, fill: DEFAULT_FILL };

/// Default style for polylines.
pub const POLYLINE_DEFAULT_STYLE: StyleDefaults =
    StyleDefaults { stroke: DEFAULT_STROKE, stroke_width: DEFAULT_STROKE_WIDTH, fill: DEFAULT_FILL };

/// Stroke and fill of a live shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Stroke color as a CSS color string.
    pub stroke: String,
    /// Stroke width in canvas pixels.
    pub stroke_width: f64,
    /// Fill color as a CSS color string, or `"transparent"`.
    pub fill: String,
}

impl Style {
    /// Build a style from `defaults` with `options` merged on top.
    #[must_use]
    pub fn merged(defaults: &StyleDefaults, options: &StyleUpdate) -> Self {
        let mut style = Self::from(defaults);
        style.apply(options);
        style
    }

    /// Apply the present fields of `update`. Returns `true` if anything changed.
    ///
    /// Negative or non-finite stroke widths are ignored.
    pub fn apply(&mut self, update: &StyleUpdate) -> bool {
        let mut changed = false;
        if let Some(ref stroke) = update.stroke {
            changed |= self.stroke != *stroke;
            self.stroke.clone_from(stroke);
        }
        if let Some(width) = update.stroke_width.filter(|w| w.is_finite() && *w >= 0.0) {
            changed |= self.stroke_width.to_bits() != width.to_bits();
            self.stroke_width = width;
        }
        if let Some(ref fill) = update.fill {
            changed |= self.fill != *fill;
            self.fill.clone_from(fill);
        }
        changed
    }
}

impl From<&StyleDefaults> for Style {
    fn from(defaults: &StyleDefaults) -> Self {
        Self {
            stroke: defaults.stroke.to_owned(),
            stroke_width: defaults.stroke_width,
            fill: defaults.fill.to_owned(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from(&RECTANGLE_DEFAULT_STYLE)
    }
}

/// Sparse style change. Only present fields are applied.
///
/// Deserializes from a JSON object with camelCase keys; unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl StyleUpdate {
    #[must_use]
    pub fn stroke(color: impl Into<String>) -> Self {
        Self { stroke: Some(color.into()), ..Default::default() }
    }

    #[must_use]
    pub fn stroke_width(width: f64) -> Self {
        Self { stroke_width: Some(width), ..Default::default() }
    }

    #[must_use]
    pub fn fill(color: impl Into<String>) -> Self {
        Self { fill: Some(color.into()), ..Default::default() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stroke.is_none() && self.stroke_width.is_none() && self.fill.is_none()
    }
}

impl From<&Style> for StyleUpdate {
    fn from(style: &Style) -> Self {
        Self {
            stroke: Some(style.stroke.clone()),
            stroke_width: Some(style.stroke_width),
            fill: Some(style.fill.clone()),
        }
    }
}
