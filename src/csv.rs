use crate::event::{EventRecord, PlayResult};
use crate::spray::SprayPoint;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const BATTER_COLUMN: &str = "Batter";

#[derive(Debug, Default)]
pub(crate) struct Loaded {
    pub(crate) rows: Vec<EventRecord>,
    /// Columns with no value in any of the batter's rows.
    pub(crate) dropped_columns: Vec<String>,
}

pub(crate) fn load_batter_file(path: &Path, batter: &str) -> Result<Loaded> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    load_batter(file, batter).with_context(|| format!("failed to load {}", path.display()))
}

/// Reads an event table, keeping only `batter`'s rows and dropping columns that are entirely
/// empty for them.
pub(crate) fn load_batter<R: Read>(reader: R, batter: &str) -> Result<Loaded> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    let batter_index = headers
        .iter()
        .position(|header| header == BATTER_COLUMN)
        .with_context(|| format!("missing {} column", BATTER_COLUMN))?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.get(batter_index) == Some(batter) {
            records.push(record);
        }
    }

    let (keep, dropped): (Vec<usize>, Vec<usize>) = (0..headers.len()).partition(|&i| {
        records
            .iter()
            .any(|record| record.get(i).map_or(false, |value| !value.is_empty()))
    });
    let dropped_columns = dropped.iter().map(|&i| headers[i].to_owned()).collect();
    let headers: StringRecord = keep.iter().map(|&i| &headers[i]).collect();

    let rows: Vec<EventRecord> = records
        .iter()
        .map(|record| {
            let trimmed: StringRecord = keep
                .iter()
                .map(|&i| record.get(i).unwrap_or_default())
                .collect();
            trimmed.deserialize(Some(&headers)).with_context(|| {
                let line = record.position().map_or(0, |pos| pos.line());
                format!("invalid event on line {}", line)
            })
        })
        .collect::<Result<_>>()?;

    Ok(Loaded {
        rows,
        dropped_columns,
    })
}

#[derive(Debug, Serialize)]
struct SprayRow {
    x: f64,
    y: f64,
    result: PlayResult,
    within_fence: bool,
}

impl From<&SprayPoint> for SprayRow {
    fn from(point: &SprayPoint) -> SprayRow {
        SprayRow {
            x: point.point.x,
            y: point.point.y,
            result: point.result,
            within_fence: point.within_fence,
        }
    }
}

pub(crate) fn write_spray<W: Write>(writer: W, points: &[SprayPoint]) -> Result<()> {
    write_csv(writer, points.iter().map(SprayRow::from))
}

fn write_csv<W: Write, T: Serialize>(writer: W, rows: impl IntoIterator<Item = T>) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
