use std::f64::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
///
/// Live angles are allowed to grow without bound between renders; anything
/// that compares angles goes through here first.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Unsigned distance from `from` to `to` travelling in the sign of `direction`,
/// in `[0, 2π)`.
#[inline]
pub fn forward_distance(from: f64, to: f64, direction: f64) -> f64 {
    if direction >= 0.0 {
        normalize_angle(to - from)
    } else {
        normalize_angle(from - to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn normalizes_multi_revolution_angles() {
        assert!((normalize_angle(5.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn never_returns_full_turn() {
        let a = normalize_angle(-1e-18);
        assert!((0.0..TAU).contains(&a), "got {a}");
    }

    #[test]
    fn distance_follows_direction() {
        // From 0 to π/2: a quarter turn forward, three quarters in reverse.
        assert!((forward_distance(0.0, PI / 2.0, 1.0) - PI / 2.0).abs() < 1e-12);
        assert!((forward_distance(0.0, PI / 2.0, -1.0) - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(forward_distance(PI, PI, 1.0), 0.0);
        assert_eq!(forward_distance(PI, PI, -1.0), 0.0);
    }
}
