//! Planet parade: nine bodies on nested ellipses.
//!
//! Outer orbits are slower and accelerate more gently; inner ones are
//! faster. Directions alternate. Every body rests at π (the leftmost point
//! of its ellipse, lined up outermost-first) except the innermost, which
//! rests at 0 on the opposite side.
//!
//! These bodies are slow next to the at-least-one-revolution return path:
//! a slope-matched return would run 15 s or more, so every return here is
//! capped at `max_return_secs` and opens faster than the body was moving.

use std::f64::consts::PI;

use glam::DVec2;

use crate::api::config::{BodyConfig, MotionConfig, ParadeConfig};
use crate::api::types::Direction;

pub const PARADE_BODY_COUNT: usize = 9;

/// Layout center of the reference scene.
pub const PARADE_CENTER: DVec2 = DVec2::new(450.0, 300.0);

/// (semi_major, semi_minor, max_speed, accel_step, decel_factor, direction, rest_angle)
const PARADE_BODIES: [(f64, f64, f64, f64, f64, Direction, f64); PARADE_BODY_COUNT] = [
    (323.0, 190.0, 0.30, 0.04, 1.08, Direction::Forward, PI),
    (289.0, 170.0, 0.38, 0.05, 1.09, Direction::Reverse, PI),
    (255.0, 150.0, 0.46, 0.06, 1.10, Direction::Forward, PI),
    (221.0, 130.0, 0.54, 0.07, 1.10, Direction::Reverse, PI),
    (187.0, 110.0, 0.62, 0.08, 1.11, Direction::Forward, PI),
    (153.0, 90.0, 0.72, 0.09, 1.11, Direction::Reverse, PI),
    (119.0, 70.0, 0.84, 0.11, 1.12, Direction::Forward, PI),
    (85.0, 50.0, 1.00, 0.13, 1.13, Direction::Reverse, PI),
    (61.0, 36.0, 1.20, 0.15, 1.14, Direction::Forward, 0.0),
];

/// The reference nine-body configuration.
pub fn planet_parade() -> ParadeConfig {
    ParadeConfig {
        motion: MotionConfig {
            center: PARADE_CENTER,
            influence_radius: 360.0,
            ..MotionConfig::default()
        },
        bodies: PARADE_BODIES
            .iter()
            .map(
                |&(semi_major, semi_minor, max_speed, accel_step, decel_factor, direction, rest_angle)| {
                    BodyConfig {
                        semi_major,
                        semi_minor,
                        direction,
                        rest_angle,
                        max_speed,
                        accel_step,
                        decel_factor,
                    }
                },
            )
            .collect(),
    }
}
