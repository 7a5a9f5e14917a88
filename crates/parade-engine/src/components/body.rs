use glam::DVec2;

use crate::api::config::BodyConfig;
use crate::api::types::Direction;
use crate::systems::return_planner::ReturnTrajectory;

/// What currently owns a body's angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Parked on the rest angle with zero speed.
    Rest,
    /// Speed evolved by the coarse scheduler, angle integrated per frame.
    Driven { speed: f64 },
    /// Angle sampled from an eased trajectory back to rest.
    Returning(ReturnTrajectory),
}

/// One orbiting body: fixed ellipse geometry plus mutable kinematic state.
#[derive(Debug, Clone)]
pub struct OrbitalBody {
    /// Horizontal ellipse radius.
    pub semi_major: f64,
    /// Vertical ellipse radius.
    pub semi_minor: f64,
    pub direction: Direction,
    /// Canonical resting angle. Fixed at construction.
    pub rest_angle: f64,
    /// Top angular speed in rad/s.
    pub max_speed: f64,
    /// Speed added per coarse tick while accelerating.
    pub accel_step: f64,
    /// Divisor applied per coarse tick while decelerating.
    pub decel_factor: f64,
    /// Current angle in radians. Unbounded while moving.
    pub(crate) angle: f64,
    pub(crate) motion: Motion,
}

impl OrbitalBody {
    /// Create a body parked at its rest angle.
    pub fn new(config: &BodyConfig) -> Self {
        Self {
            semi_major: config.semi_major,
            semi_minor: config.semi_minor,
            direction: config.direction,
            rest_angle: config.rest_angle,
            max_speed: config.max_speed,
            accel_step: config.accel_step,
            decel_factor: config.decel_factor,
            angle: config.rest_angle,
            motion: Motion::Rest,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Scalar speed driven by the scheduler. Zero at rest and while returning;
    /// use `ReturnTrajectory::speed_at` for the eased rate.
    pub fn speed(&self) -> f64 {
        match self.motion {
            Motion::Driven { speed } => speed,
            Motion::Rest | Motion::Returning(_) => 0.0,
        }
    }

    pub fn is_returning(&self) -> bool {
        matches!(self.motion, Motion::Returning(_))
    }

    pub fn is_at_rest(&self) -> bool {
        self.motion == Motion::Rest
    }

    /// Whether this body still needs frames: nonzero speed or mid-return.
    pub fn is_moving(&self) -> bool {
        match self.motion {
            Motion::Rest => false,
            Motion::Driven { speed } => speed > 0.0,
            Motion::Returning(_) => true,
        }
    }

    /// Park exactly on the rest angle, dropping any accumulated revolutions.
    pub(crate) fn park(&mut self) {
        self.angle = self.rest_angle;
        self.motion = Motion::Rest;
    }

    /// Axis-aligned ellipse position around `center`.
    pub fn position(&self, center: DVec2) -> DVec2 {
        DVec2::new(
            center.x + self.semi_major * self.angle.cos(),
            center.y + self.semi_minor * self.angle.sin(),
        )
    }
}

#[cfg(test)]
pub(crate) fn test_body(max_speed: f64, accel_step: f64, decel_factor: f64) -> OrbitalBody {
    OrbitalBody::new(&BodyConfig {
        semi_major: 100.0,
        semi_minor: 50.0,
        direction: Direction::Forward,
        rest_angle: std::f64::consts::PI,
        max_speed,
        accel_step,
        decel_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn new_body_rests_on_rest_angle() {
        let body = test_body(1.0, 0.1, 1.1);
        assert!(body.is_at_rest());
        assert_eq!(body.angle(), PI);
        assert_eq!(body.speed(), 0.0);
        assert!(!body.is_moving());
    }

    #[test]
    fn position_projects_onto_ellipse() {
        let mut body = test_body(1.0, 0.1, 1.1);
        let center = DVec2::new(450.0, 300.0);

        let p = body.position(center);
        assert!((p.x - 350.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);

        body.angle = FRAC_PI_2;
        let p = body.position(center);
        assert!((p.x - 450.0).abs() < 1e-9);
        assert!((p.y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn park_discards_revolutions() {
        let mut body = test_body(1.0, 0.1, 1.1);
        body.angle = PI + 6.0 * std::f64::consts::TAU;
        body.motion = Motion::Driven { speed: 0.0 };
        body.park();
        assert_eq!(body.angle(), PI);
        assert!(body.is_at_rest());
    }
}
