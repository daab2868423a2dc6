use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Clockwise rotation applied to every landing point so the fair-territory quarter-plane lines up
/// with the x and y axes of the field frame.
pub(crate) const DISPLAY_ROTATION: f64 = FRAC_PI_4;

/// A position on the field, in feet, with home plate at the origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

pub(crate) type LandingPoint = Point;

impl Point {
    pub(crate) const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub(crate) fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub(crate) fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Converts a batted ball's distance (feet) and direction (degrees, 0 toward center, positive
/// toward the pull side) into unrotated field coordinates.
pub(crate) fn polar_to_field(distance: f64, direction: f64) -> Point {
    let (sin, cos) = direction.to_radians().sin_cos();
    Point {
        x: distance * sin,
        y: distance * cos,
    }
}

/// Rotates `point` clockwise by `angle` radians.
pub(crate) fn rotate(point: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    // both components come from the unrotated pair
    let Point { x, y } = point;
    Point {
        x: x * cos + y * sin,
        y: -x * sin + y * cos,
    }
}

/// Inverse of [`rotate`].
pub(crate) fn unrotate(point: Point, angle: f64) -> Point {
    rotate(point, -angle)
}

/// Where a batted ball lands in the display frame.
pub(crate) fn landing_point(distance: f64, direction: f64) -> LandingPoint {
    rotate(polar_to_field(distance, direction), DISPLAY_ROTATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    #[test]
    fn straight_away() {
        let raw = polar_to_field(100.0, 0.0);
        assert_approx_eq!(f64, raw.x, 0.0);
        assert_approx_eq!(f64, raw.y, 100.0);

        let landed = landing_point(100.0, 0.0);
        assert_approx_eq!(f64, landed.x, 70.710678118654755, epsilon = 1e-9);
        assert_approx_eq!(f64, landed.y, 70.710678118654755, epsilon = 1e-9);
    }

    #[test]
    fn down_the_lines() {
        // pull side lands on the +x foul line, opposite field on the +y foul line
        let pull = landing_point(300.0, 45.0);
        assert_approx_eq!(f64, pull.x, 300.0, epsilon = 1e-9);
        assert_approx_eq!(f64, pull.y, 0.0, epsilon = 1e-9);

        let oppo = landing_point(300.0, -45.0);
        assert_approx_eq!(f64, oppo.x, 0.0, epsilon = 1e-9);
        assert_approx_eq!(f64, oppo.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn not_sequential() {
        // an in-place update would feed the rotated x into y
        let raw = Point::new(30.0, 40.0);
        let rotated = rotate(raw, DISPLAY_ROTATION);
        let half = FRAC_PI_4.cos();
        assert_approx_eq!(f64, rotated.x, 70.0 * half, epsilon = 1e-9);
        assert_approx_eq!(f64, rotated.y, 10.0 * half, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn zero_distance(direction in -180.0_f64..180.0) {
            let landed = landing_point(0.0, direction);
            prop_assert_eq!(landed.x.abs(), 0.0);
            prop_assert_eq!(landed.y.abs(), 0.0);
        }

        #[test]
        fn round_trip(distance in 0.0_f64..500.0, direction in -90.0_f64..90.0) {
            let raw = polar_to_field(distance, direction);
            let back = unrotate(landing_point(distance, direction), DISPLAY_ROTATION);
            prop_assert!((back.x - raw.x).abs() < 1e-9);
            prop_assert!((back.y - raw.y).abs() < 1e-9);
        }

        #[test]
        fn rotation_preserves_distance(distance in 0.0_f64..500.0, direction in -90.0_f64..90.0) {
            let landed = landing_point(distance, direction);
            prop_assert!((landed.norm() - distance).abs() < 1e-9);
        }
    }
}
