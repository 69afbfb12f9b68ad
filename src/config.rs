//! Markup settings parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{HIT_TOLERANCE_PX, MIN_SHAPE_SIZE};

pub const MIN_SHAPE_SIZE_VAR: &str = "MARKUP_MIN_SHAPE_SIZE";
pub const HIT_TOLERANCE_VAR: &str = "MARKUP_HIT_TOLERANCE";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a number: {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkupConfig {
    /// Smallest accepted width/height for dragged rectangles and circles.
    pub min_shape_size: f64,
    /// Slop in canvas pixels for [`crate::shape::Shape::hit_test`].
    pub hit_tolerance: f64,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self { min_shape_size: MIN_SHAPE_SIZE, hit_tolerance: HIT_TOLERANCE_PX }
    }
}

impl MarkupConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `MARKUP_MIN_SHAPE_SIZE`: default 5
    /// - `MARKUP_HIT_TOLERANCE`: default 4
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but is not a finite,
    /// non-negative number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            min_shape_size: env_parse_f64(MIN_SHAPE_SIZE_VAR, MIN_SHAPE_SIZE)?,
            hit_tolerance: env_parse_f64(HIT_TOLERANCE_VAR, HIT_TOLERANCE_PX)?,
        })
    }
}

fn env_parse_f64(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_non_negative(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_non_negative(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse { var, value: raw.to_owned() })?;
    if !value.is_finite() {
        return Err(ConfigError::Invalid { var, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(ConfigError::Invalid { var, reason: "must not be negative" });
    }
    Ok(value)
}
