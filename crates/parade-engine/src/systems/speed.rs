//! Speed scheduler: the coarse tick that evolves each body's scalar speed.
//!
//! Runs on a fixed interval, independent of frame rate, so speed changes
//! are decoupled from rendering jitter. The frame loop only reads the result.

use crate::components::body::{Motion, OrbitalBody};
use crate::systems::proximity::target_speed;

/// Speeds at or below this are exactly zero.
pub const ZERO_EPSILON: f64 = 0.001;

/// Truncate to 3 decimal places.
///
/// Sums like `0.7 + 0.1` land a hair under the intended value; the guard
/// keeps them from truncating one step low.
#[inline]
pub fn truncate_milli(value: f64) -> f64 {
    (value * 1000.0 + 1e-9).floor() / 1000.0
}

/// Truncate, then snap anything at or below the epsilon to exactly 0 so a
/// geometric decay terminates instead of tailing off forever.
#[inline]
fn settle(value: f64) -> f64 {
    let truncated = truncate_milli(value);
    if truncated <= ZERO_EPSILON {
        0.0
    } else {
        truncated
    }
}

/// Advance one body by one coarse tick.
///
/// While interacting, speed ramps linearly up toward `max_speed · p³` and
/// eases geometrically down when the target drops below it. Without
/// interaction a driven body free-decays; a returning body belongs to its
/// trajectory and is left alone.
pub fn step_speed(body: &mut OrbitalBody, proximity: f64, interacting: bool) {
    if interacting {
        let speed = match body.motion {
            Motion::Rest => 0.0,
            Motion::Driven { speed } => speed,
            Motion::Returning(_) => return,
        };
        let target = target_speed(body.max_speed, proximity);
        let next = if speed < target {
            target.min(truncate_milli(speed + body.accel_step))
        } else {
            target.max(settle(speed / body.decel_factor))
        };
        body.motion = Motion::Driven { speed: next };
    } else if let Motion::Driven { speed } = body.motion {
        body.motion = Motion::Driven {
            speed: settle(speed / body.decel_factor),
        };
    }
}

/// Run one coarse tick over every body.
///
/// Returns whether the scheduler should stay armed: always while
/// interacting, otherwise only while some body still has speed to shed.
pub fn run_speed_tick(bodies: &mut [OrbitalBody], proximity: f64, interacting: bool) -> bool {
    for body in bodies.iter_mut() {
        step_speed(body, proximity, interacting);
    }
    interacting || bodies.iter().any(|b| b.speed() > 0.0)
}
