//! Proximity field: how close the pointer is to the parade center.

use glam::DVec2;

/// Normalized inverse distance from `pointer` to `center`, in [0, 1].
///
/// 1 at the center, 0 at or beyond `max_radius`.
pub fn compute_proximity(pointer: DVec2, center: DVec2, max_radius: f64) -> f64 {
    if max_radius <= 0.0 {
        return 0.0;
    }
    let distance = pointer.distance(center);
    (1.0 - distance / max_radius).clamp(0.0, 1.0)
}

/// Speed a body is pulled toward at proximity `p`: `max_speed · p³`.
///
/// The cubic stays soft near the edge of the field and ramps hard near the
/// center. Strictly increasing in `p`; only `p = 0` yields 0.
pub fn target_speed(max_speed: f64, proximity: f64) -> f64 {
    let p = proximity.clamp(0.0, 1.0);
    max_speed * p * p * p
}

/// Latest proximity sample. Holds its value until the next pointer sample.
#[derive(Debug, Clone)]
pub struct ProximityField {
    center: DVec2,
    max_radius: f64,
    value: f64,
}

impl ProximityField {
    pub fn new(center: DVec2, max_radius: f64) -> Self {
        Self {
            center,
            max_radius,
            value: 0.0,
        }
    }

    /// Recompute from a pointer sample and return the new value.
    pub fn sample(&mut self, pointer: DVec2) -> f64 {
        self.value = compute_proximity(pointer, self.center, self.max_radius);
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_at_center_zero_at_edge() {
        let center = DVec2::new(450.0, 300.0);
        assert_eq!(compute_proximity(center, center, 200.0), 1.0);
        assert_eq!(compute_proximity(DVec2::new(650.0, 300.0), center, 200.0), 0.0);
        assert_eq!(compute_proximity(DVec2::new(2000.0, 2000.0), center, 200.0), 0.0);
    }

    #[test]
    fn halfway_is_half() {
        let p = compute_proximity(DVec2::new(30.0, 40.0), DVec2::ZERO, 100.0);
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_radius_gives_zero() {
        assert_eq!(compute_proximity(DVec2::ZERO, DVec2::ZERO, 0.0), 0.0);
    }

    #[test]
    fn target_endpoints() {
        assert_eq!(target_speed(6.0, 0.0), 0.0);
        assert_eq!(target_speed(6.0, 1.0), 6.0);
    }

    #[test]
    fn target_strictly_increasing_inside_unit_interval() {
        let mut prev = target_speed(6.0, 0.01);
        for i in 2..100 {
            let t = target_speed(6.0, i as f64 / 100.0);
            assert!(t > prev, "not increasing at p={}", i as f64 / 100.0);
            prev = t;
        }
    }

    #[test]
    fn target_positive_everywhere_but_the_edge() {
        assert_eq!(target_speed(6.0, 0.0), 0.0);
        for i in 1..100 {
            let p = i as f64 / 100.0;
            assert!(target_speed(6.0, p) > 0.0, "zero target at p={p}");
        }
        // 6 · 0.05³ = 0.00075, under the speed epsilon but still a pull
        assert!(target_speed(6.0, 0.05) > 0.0);
    }

    #[test]
    fn field_holds_last_sample() {
        let mut field = ProximityField::new(DVec2::ZERO, 100.0);
        assert_eq!(field.value(), 0.0);
        let p = field.sample(DVec2::new(0.0, 25.0));
        assert!((p - 0.75).abs() < 1e-12);
        assert_eq!(field.value(), p);
    }
}
