//! Reference geometry of a baseball field in the rotated display frame.
//!
//! Home plate sits at the origin, the first-base foul line runs along +x and the third-base foul
//! line along +y, so fair territory is the quarter-plane `x >= 0, y >= 0`.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

pub(crate) const DEFAULT_FENCE_RADIUS: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub(crate) struct FieldGeometry {
    pub(crate) fence_radius: f64,
    /// Angle between the foul lines, in degrees.
    pub(crate) foul_line_angle: f64,
    pub(crate) base_spacing: f64,
    pub(crate) base_size: f64,
    pub(crate) mound_distance: f64,
    pub(crate) mound_radius: f64,
}

impl Default for FieldGeometry {
    fn default() -> FieldGeometry {
        FieldGeometry {
            fence_radius: DEFAULT_FENCE_RADIUS,
            foul_line_angle: 90.0,
            base_spacing: 90.0,
            base_size: 8.0,
            mound_distance: 60.5,
            mound_radius: 9.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct Bases {
    pub(crate) home: Point,
    pub(crate) first: Point,
    pub(crate) second: Point,
    pub(crate) third: Point,
}

impl Bases {
    pub(crate) fn bags(&self) -> [Point; 3] {
        [self.first, self.second, self.third]
    }
}

/// Axis-aligned square, stored as its lower-left corner and side length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct Square {
    pub(crate) corner: Point,
    pub(crate) size: f64,
}

impl Square {
    fn centered(center: Point, size: f64) -> Square {
        Square {
            corner: Point::new(center.x - size / 2.0, center.y - size / 2.0),
            size,
        }
    }
}

/// True when `(x, y)` is in fair territory and no farther from home than the fence.
pub(crate) fn is_within_fence(x: f64, y: f64, fence_radius: f64) -> bool {
    x >= 0.0 && y >= 0.0 && x.hypot(y) <= fence_radius
}

pub(crate) fn base_positions(base_spacing: f64) -> Bases {
    Bases {
        home: Point::ORIGIN,
        first: Point::new(base_spacing, 0.0),
        second: Point::new(base_spacing, base_spacing),
        third: Point::new(0.0, base_spacing),
    }
}

/// The mound lies on the home-to-second bisector.
pub(crate) fn mound_position(mound_distance: f64) -> Point {
    Point::new(mound_distance / SQRT_2, mound_distance / SQRT_2)
}

impl FieldGeometry {
    pub(crate) fn with_fence_radius(fence_radius: f64) -> FieldGeometry {
        FieldGeometry {
            fence_radius,
            ..FieldGeometry::default()
        }
    }

    pub(crate) fn contains(&self, point: Point) -> bool {
        is_within_fence(point.x, point.y, self.fence_radius)
    }

    pub(crate) fn bases(&self) -> Bases {
        base_positions(self.base_spacing)
    }

    pub(crate) fn mound(&self) -> Point {
        mound_position(self.mound_distance)
    }

    /// `samples` evenly spaced points along the fence, from the first-base line to the third-base
    /// line.
    pub(crate) fn fence_arc(&self, samples: usize) -> Vec<Point> {
        let sweep = self.foul_line_angle.to_radians();
        match samples {
            0 => Vec::new(),
            1 => vec![Point::new(self.fence_radius, 0.0)],
            _ => (0..samples)
                .map(|i| {
                    let theta = sweep * i as f64 / (samples - 1) as f64;
                    Point::new(
                        self.fence_radius * theta.cos(),
                        self.fence_radius * theta.sin(),
                    )
                })
                .collect(),
        }
    }

    /// Both foul lines, from home plate out to the fence.
    pub(crate) fn foul_lines(&self) -> [(Point, Point); 2] {
        let sweep = self.foul_line_angle.to_radians();
        [
            (Point::ORIGIN, Point::new(self.fence_radius, 0.0)),
            (
                Point::ORIGIN,
                Point::new(
                    self.fence_radius * sweep.cos(),
                    self.fence_radius * sweep.sin(),
                ),
            ),
        ]
    }

    /// Infield diamond as a closed polygon: home, first, second, third.
    pub(crate) fn diamond(&self) -> [Point; 4] {
        let bases = self.bases();
        [bases.home, bases.first, bases.second, bases.third]
    }

    pub(crate) fn base_bags(&self) -> [Square; 3] {
        self.bases()
            .bags()
            .map(|base| Square::centered(base, self.base_size))
    }
}
