use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::types::Direction;
use crate::extensions::easing::Easing;

/// Engine-wide timing and field settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fixed center every orbit is laid out around.
    pub center: DVec2,
    /// Pointer distance at which proximity falls to zero.
    pub influence_radius: f64,
    /// Coarse speed tick period in milliseconds (default: 100).
    pub tick_interval_ms: f64,
    /// Frame samples longer than this are stalls (default: 100).
    pub max_frame_dt_ms: f64,
    /// Step used in place of a stalled frame sample (default: 16).
    pub nominal_frame_dt_ms: f64,
    /// Shortest allowed return trajectory in seconds (default: 1).
    pub min_return_secs: f64,
    /// Longest allowed return trajectory in seconds (default: 6).
    pub max_return_secs: f64,
    /// Curve used for return trajectories (default: cubic out).
    pub return_easing: Easing,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            influence_radius: 400.0,
            tick_interval_ms: 100.0,
            max_frame_dt_ms: 100.0,
            nominal_frame_dt_ms: 16.0,
            min_return_secs: 1.0,
            max_return_secs: 6.0,
            return_easing: Easing::CubicOut,
        }
    }
}

impl MotionConfig {
    /// Coarse tick period in seconds.
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval_ms / 1000.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("influence_radius", self.influence_radius),
            ("tick_interval_ms", self.tick_interval_ms),
            ("max_frame_dt_ms", self.max_frame_dt_ms),
            ("nominal_frame_dt_ms", self.nominal_frame_dt_ms),
            ("min_return_secs", self.min_return_secs),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Motion { field, value });
            }
        }
        if !(self.max_return_secs >= self.min_return_secs) {
            return Err(ConfigError::ReturnBounds {
                min: self.min_return_secs,
                max: self.max_return_secs,
            });
        }
        Ok(())
    }
}

/// Static description of one orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Horizontal ellipse radius.
    pub semi_major: f64,
    /// Vertical ellipse radius.
    pub semi_minor: f64,
    /// Rotation sense.
    #[serde(default)]
    pub direction: Direction,
    /// Canonical resting angle in radians.
    #[serde(default)]
    pub rest_angle: f64,
    /// Top angular speed in rad/s.
    pub max_speed: f64,
    /// Speed added per coarse tick while accelerating.
    pub accel_step: f64,
    /// Divisor applied per coarse tick while decelerating.
    pub decel_factor: f64,
}

impl BodyConfig {
    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let checks = [
            ("semi_major", self.semi_major, 0.0),
            ("semi_minor", self.semi_minor, 0.0),
            ("max_speed", self.max_speed, 0.0),
            ("accel_step", self.accel_step, 0.0),
            ("decel_factor", self.decel_factor, 1.0),
        ];
        for (field, value, floor) in checks {
            if !(value > floor) {
                return Err(ConfigError::Body { index, field, value, floor });
            }
        }
        if !self.rest_angle.is_finite() {
            return Err(ConfigError::Body {
                index,
                field: "rest_angle",
                value: self.rest_angle,
                floor: f64::NEG_INFINITY,
            });
        }
        Ok(())
    }
}

/// Complete parade description: engine settings plus the body list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParadeConfig {
    #[serde(default)]
    pub motion: MotionConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ParadeConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric constraint the motion code relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        self.motion.validate()?;
        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
        }
        Ok(())
    }
}

/// Reasons a parade configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parade json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("parade has no bodies")]
    NoBodies,
    #[error("motion.{field} must be positive, got {value}")]
    Motion { field: &'static str, value: f64 },
    #[error("return bounds inverted: min {min}s > max {max}s")]
    ReturnBounds { min: f64, max: f64 },
    #[error("body {index}: {field} must exceed {floor}, got {value}")]
    Body {
        index: usize,
        field: &'static str,
        value: f64,
        floor: f64,
    },
}
