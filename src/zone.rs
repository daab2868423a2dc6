//! Strike zone and home plate, seen from behind the plate. The back edge of the plate lies on
//! `y = 0`; heights are in feet above the ground.

use crate::geometry::Point;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct StrikeZone {
    pub(crate) left: f64,
    pub(crate) right: f64,
    pub(crate) bottom: f64,
    pub(crate) top: f64,
}

/// Average strike zone: 1.66 ft wide, from 1.5 ft to 3.5 ft.
pub(crate) const STRIKE_ZONE: StrikeZone = StrikeZone {
    left: -0.83,
    right: 0.83,
    bottom: 1.5,
    top: 3.5,
};

const PLATE_HALF_WIDTH: f64 = 0.83;
const PLATE_DEPTH: f64 = 0.43;

/// Visible window for plate-location plots: (x range, y range).
pub(crate) const PLOT_WINDOW: ((f64, f64), (f64, f64)) = ((-2.5, 2.5), (-0.5, 4.0));

impl StrikeZone {
    pub(crate) fn contains(&self, side: f64, height: f64) -> bool {
        (self.left..=self.right).contains(&side) && (self.bottom..=self.top).contains(&height)
    }

    /// Closed outline, starting and ending at the lower-left corner.
    pub(crate) fn outline(&self) -> [Point; 5] {
        [
            Point::new(self.left, self.bottom),
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }
}

pub(crate) fn home_plate() -> [Point; 5] {
    [
        Point::new(-PLATE_HALF_WIDTH, 0.0),
        Point::new(PLATE_HALF_WIDTH, 0.0),
        Point::new(PLATE_HALF_WIDTH, -PLATE_DEPTH / 2.0),
        Point::new(0.0, -PLATE_DEPTH),
        Point::new(-PLATE_HALF_WIDTH, -PLATE_DEPTH / 2.0),
    ]
}

#[cfg(test)]
#[test]
fn test() {
    assert!(STRIKE_ZONE.contains(0.0, 2.5));
    assert!(STRIKE_ZONE.contains(0.83, 3.5));
    assert!(!STRIKE_ZONE.contains(0.9, 2.5));
    assert!(!STRIKE_ZONE.contains(0.0, 1.2));

    let outline = STRIKE_ZONE.outline();
    assert_eq!(outline[0], outline[4]);

    let plate = home_plate();
    assert!(plate.iter().all(|p| p.y <= 0.0));
    assert_eq!(plate[3], Point::new(0.0, -0.43));

    let ((x0, x1), (y0, y1)) = PLOT_WINDOW;
    for p in outline.iter().chain(plate.iter()) {
        assert!((x0..=x1).contains(&p.x) && (y0..=y1).contains(&p.y));
    }
}
