//! Return planner: eased trajectories that carry a body back to rest.
//!
//! A return always travels forward (in the body's direction) to the next
//! occurrence of the rest angle plus one extra full revolution, so the stop
//! never reads as a snap. Its duration is chosen so the curve's opening
//! slope equals the body's speed at hand-off, then clamped to configured
//! bounds.

use std::f64::consts::TAU;

use crate::components::body::{Motion, OrbitalBody};
use crate::core::angle::forward_distance;
use crate::extensions::easing::{ease, Easing};
use crate::systems::speed::truncate_milli;

/// A time-boxed eased path from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnTrajectory {
    /// Angle at hand-off.
    pub from: f64,
    /// Unnormalized landing angle; congruent to the rest angle mod 2π.
    pub to: f64,
    /// Frame timestamp the trajectory was planned at, in milliseconds.
    pub start_ms: f64,
    /// Length of the trajectory in seconds.
    pub duration: f64,
    pub easing: Easing,
}

impl ReturnTrajectory {
    /// Normalized progress [0, 1] at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / 1000.0 / self.duration).clamp(0.0, 1.0)
    }

    /// Angle along the trajectory at `now_ms`.
    pub fn angle_at(&self, now_ms: f64) -> f64 {
        ease(self.from, self.to, self.progress(now_ms), self.easing)
    }

    /// Unsigned angular rate at `now_ms`, in rad/s.
    pub fn speed_at(&self, now_ms: f64) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.to - self.from).abs() * self.easing.slope(self.progress(now_ms)) / self.duration
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.duration <= 0.0 || now_ms >= self.end_ms()
    }

    /// Timestamp at which the body lands, in milliseconds.
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration * 1000.0
    }
}

/// Duration whose opening slope matches `speed`, clamped to `[min_secs, max_secs]`.
pub fn return_duration(distance: f64, speed: f64, easing: Easing, min_secs: f64, max_secs: f64) -> f64 {
    if speed <= 0.0 {
        return max_secs;
    }
    (distance * easing.initial_slope() / speed).clamp(min_secs, max_secs)
}

/// Plan a return for a driven body. `None` when it has no speed to carry,
/// in which case it should be parked directly.
pub fn plan_return(
    body: &OrbitalBody,
    now_ms: f64,
    easing: Easing,
    min_secs: f64,
    max_secs: f64,
) -> Option<ReturnTrajectory> {
    let speed = body.speed();
    if speed <= 0.0 {
        return None;
    }
    let sign = body.direction.sign();
    let distance = forward_distance(body.angle, body.rest_angle, sign) + TAU;
    Some(ReturnTrajectory {
        from: body.angle,
        to: body.angle + sign * distance,
        start_ms: now_ms,
        duration: return_duration(distance, speed, easing, min_secs, max_secs),
        easing,
    })
}

/// Hand every driven body to a trajectory; stationary ones are parked.
pub fn begin_returns(bodies: &mut [OrbitalBody], now_ms: f64, easing: Easing, min_secs: f64, max_secs: f64) {
    for body in bodies.iter_mut() {
        if !matches!(body.motion, Motion::Driven { .. }) {
            continue;
        }
        match plan_return(body, now_ms, easing, min_secs, max_secs) {
            Some(trajectory) => {
                log::debug!(
                    "return planned: {:.3} -> {:.3} rad over {:.2}s",
                    trajectory.from,
                    trajectory.to,
                    trajectory.duration
                );
                body.motion = Motion::Returning(trajectory);
            }
            None => body.park(),
        }
    }
}

/// Abort a return mid-flight, handing the body back to the scheduler at the
/// trajectory's current rate so its speed stays continuous.
pub fn cancel_return(body: &mut OrbitalBody, now_ms: f64) {
    if let Motion::Returning(trajectory) = body.motion {
        let speed = truncate_milli(trajectory.speed_at(now_ms)).clamp(0.0, body.max_speed);
        body.motion = Motion::Driven { speed };
    }
}
