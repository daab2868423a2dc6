use crate::pitches::PitchShare;
use crate::stats::AggregateStats;
use crate::table::{row, Table, Value};

pub(crate) const COLS: usize = 7;

pub(crate) fn table(stats: AggregateStats) -> Table<COLS> {
    let mut table = Table::new([
        ("At Bats", "AB"),
        ("Hits", "H"),
        ("Home Runs", "HR"),
        ("Runs Batted In", "RBI"),
        ("Bases on Balls (Walks)", "BB"),
        ("Strikeouts", "SO"),
        ("Extra-Base Hits", "XB_HITS"),
    ]);
    table.push(build_row(stats));
    table
}

fn build_row(stats: AggregateStats) -> [Value; COLS] {
    row![
        stats.at_bats,
        stats.hits,
        stats.home_runs,
        stats.runs_batted_in,
        stats.walks,
        stats.strike_outs,
        stats.extra_base_hits,
    ]
}

pub(crate) fn mix_table(mix: &[PitchShare]) -> Table<2> {
    let mut table = Table::new([("Pitch Type", "Pitch"), ("Share of Pitches", "Share")]);
    for share in mix {
        table.push(row![share.pitch_type.as_str(), share.share]);
    }
    table
}
