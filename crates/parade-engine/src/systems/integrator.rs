//! Angle integrator: the per-frame step that moves bodies along their orbits.

use crate::components::body::{Motion, OrbitalBody};

/// Advance one body by one frame.
///
/// `dt` is the clamped frame delta in seconds; `now_ms` is the frame
/// timestamp, used to sample return trajectories directly.
pub fn step_angle(body: &mut OrbitalBody, dt: f64, now_ms: f64) {
    match body.motion {
        Motion::Returning(trajectory) => {
            if trajectory.is_complete(now_ms) {
                body.park();
            } else {
                body.angle = trajectory.angle_at(now_ms);
            }
        }
        Motion::Driven { speed } if speed > 0.0 => {
            body.angle += speed * body.direction.sign() * dt;
        }
        Motion::Driven { .. } | Motion::Rest => {}
    }
}

/// Run one frame over every body. Returns whether any body is still moving.
pub fn run_frame(bodies: &mut [OrbitalBody], dt: f64, now_ms: f64) -> bool {
    let mut any_moving = false;
    for body in bodies.iter_mut() {
        step_angle(body, dt, now_ms);
        any_moving |= body.is_moving();
    }
    any_moving
}
