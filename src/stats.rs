use crate::event::{EventRecord, KorBB, PlayResult};
use serde::{Deserialize, Serialize};

/// Box-score line for one batter's game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct AggregateStats {
    #[serde(rename = "AB")]
    pub(crate) at_bats: u32,
    #[serde(rename = "H")]
    pub(crate) hits: u32,
    #[serde(rename = "HR")]
    pub(crate) home_runs: u32,
    #[serde(rename = "RBI")]
    pub(crate) runs_batted_in: u32,
    #[serde(rename = "BB")]
    pub(crate) walks: u32,
    #[serde(rename = "SO")]
    pub(crate) strike_outs: u32,
    #[serde(rename = "XB_HITS")]
    pub(crate) extra_base_hits: u32,
}

/// Which branch of the at-bat classification credited a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AtBatRule {
    /// The plate appearance ended in a strikeout state other than a walk or HBP.
    Terminal,
    /// The play produced a result that is not a sacrifice, steal, or interference.
    InPlay,
}

pub(crate) fn aggregate(rows: &[EventRecord]) -> AggregateStats {
    let count = |f: fn(&EventRecord) -> bool| rows.iter().filter(|row| f(row)).count() as u32;

    AggregateStats {
        at_bats: count(|row| at_bat_rule(row).is_some()),
        hits: count(|row| row.play_result.map_or(false, PlayResult::is_hit)),
        home_runs: count(|row| row.play_result == Some(PlayResult::HomeRun)),
        runs_batted_in: rows
            .iter()
            .filter(|row| row.tagged_hit_type.map_or(false, |t| t.is_batted_ball()))
            .filter_map(|row| row.runs_scored)
            .sum(),
        walks: count(|row| row.play_result == Some(PlayResult::Walk)),
        strike_outs: count(|row| row.kor_bb == Some(KorBB::Strikeout)),
        extra_base_hits: count(|row| {
            row.play_result
                .map_or(false, PlayResult::is_extra_base_hit)
        }),
    }
}

/// Classifies a row as an official at-bat. Rule 1 is checked before rule 2, so a row is credited
/// at most once. A walk or hit-by-pitch is never an at-bat, whatever the play result says.
pub(crate) fn at_bat_rule(row: &EventRecord) -> Option<AtBatRule> {
    match row.kor_bb {
        Some(KorBB::Walk | KorBB::HitByPitch) => return None,
        Some(kor_bb) if kor_bb.is_known() && kor_bb != KorBB::Undefined => {
            return Some(AtBatRule::Terminal);
        }
        _ => {}
    }

    match row.play_result {
        Some(result)
            if result.is_known()
                && !matches!(
                    result,
                    PlayResult::Undefined
                        | PlayResult::StolenBase
                        | PlayResult::SacrificeFly
                        | PlayResult::SacrificeHit
                        | PlayResult::CatcherInterference
                ) =>
        {
            Some(AtBatRule::InPlay)
        }
        _ => None,
    }
}
