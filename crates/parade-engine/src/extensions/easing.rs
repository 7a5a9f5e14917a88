// extensions/easing.rs
//
// Ease-out curves for return trajectories.
// No dependencies on bodies or the engine; just math.
//
// Every curve here is monotone non-decreasing on [0, 1] and lands exactly
// on 1.0, so a trajectory driven by it never rewinds and never overshoots.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Easing curve used to decelerate a body onto its rest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity, then a hard stop.
    Linear,
    /// Slow end.
    QuadOut,
    /// Stronger slow end.
    #[default]
    CubicOut,
    /// Very strong slow end.
    QuartOut,
    /// Sine wave slow end (gentlest curvature).
    SineOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::SineOut => (t * FRAC_PI_2).sin(),
        }
    }

    /// Derivative of the curve with respect to `t`, for `t` in [0, 1].
    #[inline]
    pub fn slope(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => 1.0,
            Easing::QuadOut => 2.0 * (1.0 - t),
            Easing::CubicOut => 3.0 * (1.0 - t).powi(2),
            Easing::QuartOut => 4.0 * (1.0 - t).powi(3),
            Easing::SineOut => FRAC_PI_2 * (t * FRAC_PI_2).cos(),
        }
    }

    /// Slope at `t = 0`. Matching this against a body's current speed gives
    /// a return that starts without a visible jolt.
    #[inline]
    pub fn initial_slope(self) -> f64 {
        self.slope(0.0)
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f64, b: f64, t: f64, easing: Easing) -> f64 {
    lerp(a, b, easing.apply(t))
}
