use crate::event::EventRecord;
use crate::field::{Bases, FieldGeometry, Square};
use crate::geometry::Point;
use crate::palette::Palettes;
use crate::pitches::{self, PitchShare, PlateMarker};
use crate::spray::{self, SprayPoint};
use crate::stats::{self, AggregateStats};
use crate::zone::{self, StrikeZone};
use chrono::NaiveDate;
use serde::Serialize;

const FENCE_SAMPLES: usize = 200;

/// Everything a renderer needs to draw one batter's game.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub(crate) batter: String,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) stats: AggregateStats,
    pub(crate) spray: Vec<SprayPoint>,
    pub(crate) strike_mix: Vec<PitchShare>,
    pub(crate) ball_mix: Vec<PitchShare>,
    pub(crate) pitch_results: Vec<PlateMarker>,
    pub(crate) pitch_types: Vec<PlateMarker>,
    pub(crate) at_bat_results: Vec<PlateMarker>,
    pub(crate) best_contact: Option<PlateMarker>,
    pub(crate) field: FieldLayout,
    pub(crate) zone: ZoneLayout,
    pub(crate) palettes: Palettes,
}

#[derive(Debug, Serialize)]
pub(crate) struct FieldLayout {
    #[serde(flatten)]
    pub(crate) geometry: FieldGeometry,
    pub(crate) fence: Vec<Point>,
    pub(crate) foul_lines: [(Point, Point); 2],
    pub(crate) diamond: [Point; 4],
    pub(crate) bases: Bases,
    pub(crate) bags: [Square; 3],
    pub(crate) mound: Point,
}

impl FieldLayout {
    pub(crate) fn new(geometry: FieldGeometry) -> FieldLayout {
        FieldLayout {
            fence: geometry.fence_arc(FENCE_SAMPLES),
            foul_lines: geometry.foul_lines(),
            diamond: geometry.diamond(),
            bases: geometry.bases(),
            bags: geometry.base_bags(),
            mound: geometry.mound(),
            geometry,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ZoneLayout {
    pub(crate) strike_zone: StrikeZone,
    pub(crate) outline: [Point; 5],
    pub(crate) plate: [Point; 5],
    pub(crate) window: ((f64, f64), (f64, f64)),
}

impl Default for ZoneLayout {
    fn default() -> ZoneLayout {
        ZoneLayout {
            strike_zone: zone::STRIKE_ZONE,
            outline: zone::STRIKE_ZONE.outline(),
            plate: zone::home_plate(),
            window: zone::PLOT_WINDOW,
        }
    }
}

impl Report {
    /// Builds every view from one batter's rows. `rows` is only read, so the same slice backs
    /// every derivation.
    pub(crate) fn build(batter: &str, rows: &[EventRecord], field: FieldGeometry) -> Report {
        let at_bat_results = pitches::at_bat_markers(rows);
        let best_contact = pitches::best_contact(&at_bat_results);
        let spray = spray::spray_points(rows, &field);
        log::debug!(
            "{}: {} rows, {} batted balls, {} inside the fence, longest {:.0} ft",
            batter,
            rows.len(),
            spray.len(),
            spray.iter().filter(|point| point.within_fence).count(),
            spray
                .iter()
                .map(|point| point.point.norm())
                .fold(0.0, f64::max)
        );

        Report {
            // the table's spelling wins over the caller's
            batter: rows
                .iter()
                .find_map(|row| row.batter.clone())
                .unwrap_or_else(|| batter.to_owned()),
            date: rows.iter().find_map(|row| row.date),
            stats: stats::aggregate(rows),
            spray,
            strike_mix: pitches::strike_mix(rows),
            ball_mix: pitches::ball_mix(rows),
            pitch_results: pitches::pitch_result_markers(rows),
            pitch_types: pitches::pitch_type_markers(rows),
            at_bat_results,
            best_contact,
            field: FieldLayout::new(field),
            zone: ZoneLayout::default(),
            palettes: Palettes::get(),
        }
    }

    pub(crate) fn title(&self) -> String {
        match self.date {
            Some(date) => format!("{} ({})", self.batter, date.format("%-m/%-d/%y")),
            None => self.batter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
Date,Batter,PitchCall,TaggedPitchType,KorBB,PlayResult,TaggedHitType,RunsScored,Distance,Direction,PlateLocSide,PlateLocHeight,ExitSpeed
2025-06-07,\"Walton, Aaron\",StrikeSwinging,Slider,Undefined,Undefined,Undefined,0,,,0.4,1.9,
2025-06-07,\"Walton, Aaron\",StrikeSwinging,Slider,Strikeout,Undefined,Undefined,0,,,-0.9,1.2,
2025-06-07,\"Walton, Aaron\",InPlay,Fastball,Undefined,Single,LineDrive,1,150.0,10.0,0.1,2.6,98.4
2025-06-07,\"Walton, Aaron\",BallCalled,Curveball,Undefined,Undefined,Undefined,0,,,1.3,3.9,
2025-06-07,\"Walton, Aaron\",BallCalled,Fastball,Walk,Undefined,Undefined,0,,,0.2,4.1,
";

    fn report() -> Report {
        let loaded = crate::csv::load_batter(TABLE.as_bytes(), "Walton, Aaron").unwrap();
        Report::build("Walton, Aaron", &loaded.rows, FieldGeometry::default())
    }

    #[test]
    fn build() {
        let report = report();
        assert_eq!(report.title(), "Walton, Aaron (6/7/25)");
        assert_eq!(
            report.stats,
            AggregateStats {
                at_bats: 2,
                hits: 1,
                runs_batted_in: 1,
                strike_outs: 1,
                ..Default::default()
            }
        );
        assert_eq!(report.spray.len(), 1);
        assert!(report.spray[0].within_fence);
        assert_eq!(report.strike_mix.len(), 1);
        assert_eq!(report.ball_mix.len(), 2);
        assert_eq!(report.pitch_results.len(), 5);
        assert_eq!(report.at_bat_results.len(), 3);
        assert_eq!(report.best_contact.map(|m| m.label), Some("LineDrive"));
        assert_eq!(report.field.fence.len(), FENCE_SAMPLES);
    }

    #[test]
    fn json() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["stats"]["AB"], 2);
        assert_eq!(json["date"], "2025-06-07");
        assert_eq!(json["spray"][0]["result"], "Single");
        assert_eq!(json["field"]["fence_radius"], 250.0);
        assert_eq!(json["field"]["bases"]["second"]["x"], 90.0);
        assert_eq!(json["strike_mix"][0]["pitch_type"], "Slider");
        assert_eq!(json["palettes"]["hit_result"]["Single"], "#56EB31");
    }

    #[test]
    fn empty() {
        let report = Report::build("Nobody", &[], FieldGeometry::default());
        assert_eq!(report.title(), "Nobody");
        assert_eq!(report.stats, AggregateStats::default());
        assert!(report.spray.is_empty());
        assert!(report.best_contact.is_none());
    }
}
