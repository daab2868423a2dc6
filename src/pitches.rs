//! Pitch-level views of a batter's game.

use crate::event::{EventRecord, KorBB, PitchCall, PitchType};
use crate::palette::{self, Palette};
use crate::percentage::Pct;
use crate::zone::STRIKE_ZONE;
use itertools::Itertools;
use serde::Serialize;

/// Pitch types that get a slice in the pitch mix, in legend order.
pub(crate) const NAMED_PITCHES: [PitchType; 7] = [
    PitchType::Fastball,
    PitchType::Slider,
    PitchType::Curveball,
    PitchType::ChangeUp,
    PitchType::Splitter,
    PitchType::Sinker,
    PitchType::Cutter,
];

pub(crate) const STRIKE_CALLS: [PitchCall; 2] =
    [PitchCall::StrikeSwinging, PitchCall::StrikeCalled];
pub(crate) const BALL_CALLS: [PitchCall; 1] = [PitchCall::BallCalled];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct PitchShare {
    pub(crate) pitch_type: PitchType,
    pub(crate) share: Pct<1>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct PlateMarker {
    pub(crate) side: f64,
    pub(crate) height: f64,
    pub(crate) label: &'static str,
    pub(crate) color: &'static str,
    pub(crate) in_zone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exit_speed: Option<f64>,
}

/// A pitch with every categorical result and its plate location recorded.
#[derive(Debug, Clone, Copy)]
struct Tracked<'a> {
    row: &'a EventRecord,
    call: PitchCall,
    pitch_type: PitchType,
    side: f64,
    height: f64,
}

fn tracked(rows: &[EventRecord]) -> impl Iterator<Item = Tracked<'_>> {
    rows.iter().filter_map(|row| {
        // these are only required to be present
        row.tagged_hit_type?;
        row.kor_bb?;
        row.play_result?;
        let (side, height) = row.plate_location()?;
        Some(Tracked {
            row,
            call: row.pitch_call?,
            pitch_type: row.tagged_pitch_type?,
            side,
            height,
        })
    })
}

pub(crate) fn pitch_mix(rows: &[EventRecord], calls: &[PitchCall]) -> Vec<PitchShare> {
    let selected = tracked(rows)
        .filter(|pitch| calls.contains(&pitch.call))
        .collect::<Vec<_>>();
    if selected.is_empty() {
        return Vec::new();
    }

    let total = selected.len() as u32;
    let counts = selected.iter().map(|pitch| pitch.pitch_type).counts();
    NAMED_PITCHES
        .iter()
        .filter_map(|pitch_type| {
            let count = *counts.get(pitch_type)?;
            Some(PitchShare {
                pitch_type: *pitch_type,
                share: Pct::new(count as u32, total),
            })
        })
        .collect()
}

pub(crate) fn strike_mix(rows: &[EventRecord]) -> Vec<PitchShare> {
    pitch_mix(rows, &STRIKE_CALLS)
}

pub(crate) fn ball_mix(rows: &[EventRecord]) -> Vec<PitchShare> {
    pitch_mix(rows, &BALL_CALLS)
}

fn markers<'a, F>(
    rows: &'a [EventRecord],
    palette: &'static Palette,
    label: F,
) -> impl Iterator<Item = PlateMarker> + 'a
where
    F: Fn(&Tracked<'a>) -> Option<&'static str> + 'a,
{
    tracked(rows).filter_map(move |pitch| {
        let (&label, &color) = palette.get_key_value(label(&pitch)?)?;
        Some(PlateMarker {
            side: pitch.side,
            height: pitch.height,
            label,
            color,
            in_zone: STRIKE_ZONE.contains(pitch.side, pitch.height),
            exit_speed: pitch.row.exit_speed,
        })
    })
}

/// Balls and strikes by their call, balls in play by the play they produced.
pub(crate) fn pitch_result_markers(rows: &[EventRecord]) -> Vec<PlateMarker> {
    markers(rows, &palette::PITCH_RESULT, |pitch| {
        Some(if pitch.call == PitchCall::InPlay {
            pitch.row.play_result?.as_str()
        } else {
            pitch.call.as_str()
        })
    })
    .collect()
}

pub(crate) fn pitch_type_markers(rows: &[EventRecord]) -> Vec<PlateMarker> {
    markers(rows, &palette::PITCH_TYPE, |pitch| Some(pitch.pitch_type.as_str())).collect()
}

/// The pitch that ended each plate appearance, labeled by strikeout/walk or by batted-ball type.
pub(crate) fn at_bat_markers(rows: &[EventRecord]) -> Vec<PlateMarker> {
    markers(rows, &palette::AT_BAT_RESULT, |pitch| match pitch.row.kor_bb? {
        KorBB::Undefined if pitch.call == PitchCall::InPlay => {
            Some(pitch.row.tagged_hit_type?.as_str())
        }
        KorBB::Undefined => None,
        kor_bb => Some(kor_bb.as_str()),
    })
    .collect()
}

/// The hardest-hit ball among `markers`; the earliest wins a tie.
pub(crate) fn best_contact(markers: &[PlateMarker]) -> Option<PlateMarker> {
    let mut best: Option<PlateMarker> = None;
    let mut max_velo = 0.0;
    for marker in markers {
        match marker.exit_speed {
            Some(velo) if velo > max_velo => {
                max_velo = velo;
                best = Some(*marker);
            }
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::HitType;
    use float_cmp::assert_approx_eq;

    fn pitch(call: &str, pitch_type: &str, kor_bb: &str, result: &str, hit: &str) -> EventRecord {
        EventRecord {
            pitch_call: Some(call.into()),
            tagged_pitch_type: Some(pitch_type.into()),
            kor_bb: Some(kor_bb.into()),
            play_result: Some(result.into()),
            tagged_hit_type: Some(hit.into()),
            plate_loc_side: Some(0.1),
            plate_loc_height: Some(2.4),
            ..Default::default()
        }
    }

    fn game() -> Vec<EventRecord> {
        vec![
            pitch("StrikeCalled", "Fastball", "Undefined", "Undefined", "Undefined"),
            pitch("StrikeSwinging", "Slider", "Undefined", "Undefined", "Undefined"),
            pitch("StrikeSwinging", "Slider", "Strikeout", "Undefined", "Undefined"),
            pitch("BallCalled", "Curveball", "Undefined", "Undefined", "Undefined"),
            pitch("BallCalled", "Knuckleball", "Undefined", "Undefined", "Undefined"),
            pitch("FoulBall", "Fastball", "Undefined", "Undefined", "Undefined"),
            EventRecord {
                exit_speed: Some(97.3),
                ..pitch("InPlay", "ChangeUp", "Undefined", "Double", "LineDrive")
            },
            EventRecord {
                exit_speed: Some(81.0),
                ..pitch("InPlay", "Cutter", "Undefined", "Out", "GroundBall")
            },
            pitch("BallCalled", "Sinker", "Walk", "Undefined", "Undefined"),
            // no plate location
            EventRecord {
                plate_loc_height: None,
                ..pitch("StrikeCalled", "Splitter", "Undefined", "Undefined", "Undefined")
            },
        ]
    }

    #[test]
    fn strike_and_ball_mix() {
        let rows = game();
        let strikes = strike_mix(&rows);
        assert_eq!(
            strikes.iter().map(|s| s.pitch_type).collect::<Vec<_>>(),
            [PitchType::Fastball, PitchType::Slider]
        );
        assert_approx_eq!(f64, strikes[0].share.0, 1.0 / 3.0);
        assert_approx_eq!(f64, strikes[1].share.0, 2.0 / 3.0);

        let balls = ball_mix(&rows);
        // the knuckleball counts toward the total but gets no slice
        assert_eq!(
            balls.iter().map(|s| s.pitch_type).collect::<Vec<_>>(),
            [PitchType::Curveball, PitchType::Sinker]
        );
        assert_approx_eq!(f64, balls[0].share.0, 1.0 / 3.0);
    }

    #[test]
    fn shares_sum_to_one() {
        let rows = game();
        let total = strike_mix(&rows)
            .into_iter()
            .fold(Pct::<1>(0.0), |acc, share| acc + share.share);
        assert_approx_eq!(f64, total.0, 1.0);
    }

    #[test]
    fn empty_mix() {
        assert!(strike_mix(&[]).is_empty());
        let rows = vec![pitch("InPlay", "Fastball", "Undefined", "Single", "LineDrive")];
        assert!(ball_mix(&rows).is_empty());
    }

    #[test]
    fn result_markers() {
        let labels = pitch_result_markers(&game())
            .into_iter()
            .map(|m| m.label)
            .collect::<Vec<_>>();
        // foul balls and outs have no color
        assert_eq!(
            labels,
            [
                "StrikeCalled",
                "StrikeSwinging",
                "StrikeSwinging",
                "BallCalled",
                "BallCalled",
                "Double",
                "BallCalled",
            ]
        );
    }

    #[test]
    fn type_markers() {
        let markers = pitch_type_markers(&game());
        assert_eq!(markers.len(), 8);
        assert!(markers.iter().all(|m| m.label != "Knuckleball"));
        assert_eq!(markers[0].color, "darkred");
        assert!(markers[0].in_zone);
    }

    #[test]
    fn at_bat_results() {
        let markers = at_bat_markers(&game());
        let labels = markers.iter().map(|m| m.label).collect::<Vec<_>>();
        assert_eq!(labels, ["Strikeout", "LineDrive", "GroundBall", "Walk"]);

        let best = best_contact(&markers).unwrap();
        assert_eq!(best.label, HitType::LineDrive.as_str());
        assert_eq!(best.exit_speed, Some(97.3));
    }

    #[test]
    fn no_contact() {
        let markers = at_bat_markers(&[pitch(
            "StrikeSwinging",
            "Fastball",
            "Strikeout",
            "Undefined",
            "Undefined",
        )]);
        assert_eq!(markers.len(), 1);
        assert_eq!(best_contact(&markers), None);
    }
}
