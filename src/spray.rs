use crate::event::{EventRecord, PlayResult};
use crate::field::FieldGeometry;
use crate::geometry::{self, LandingPoint};
use crate::ResultExt;
use anyhow::{ensure, Result};
use serde::Serialize;

/// A batted ball's landing spot, labeled with the play it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct SprayPoint {
    #[serde(flatten)]
    pub(crate) point: LandingPoint,
    pub(crate) result: PlayResult,
    pub(crate) within_fence: bool,
}

/// Rejects measurements the landing-point transform would happily accept but that cannot come
/// from a real batted ball.
pub(crate) fn validate_measurement(distance: f64, direction: f64) -> Result<()> {
    ensure!(distance.is_finite(), "non-finite distance {}", distance);
    ensure!(direction.is_finite(), "non-finite direction {}", direction);
    ensure!(distance >= 0.0, "negative distance {}", distance);
    Ok(())
}

pub(crate) fn spray_points(rows: &[EventRecord], field: &FieldGeometry) -> Vec<SprayPoint> {
    rows.iter()
        .filter_map(|row| {
            let (distance, direction) = row.polar()?;
            validate_measurement(distance, direction).log_warn()?;
            let point = geometry::landing_point(distance, direction);
            Some(SprayPoint {
                point,
                result: row.play_result.unwrap_or(PlayResult::Undefined),
                within_fence: field.contains(point),
            })
        })
        .collect()
}
