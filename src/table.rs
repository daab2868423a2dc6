use crate::percentage::Pct;
use derive_more::{Display, From};
use itertools::Itertools;
use std::fmt::{self, Display};

#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        [
            $(
                $crate::table::Value::from($value)
            ),*
        ]
    };
}

pub use row;

/// Plain-text table with a fixed number of columns, right-aligned.
#[derive(Debug)]
pub(crate) struct Table<const N: usize> {
    pub(crate) header: [String; N],
    pub(crate) abbr: [String; N],
    pub(crate) rows: Vec<[Value; N]>,
}

impl<const N: usize> Table<N>
where
    [String; N]: Default,
{
    pub(crate) fn new(header_abbr: [(impl ToString, impl ToString); N]) -> Table<N> {
        let mut header: [String; N] = Default::default();
        let mut abbr: [String; N] = Default::default();
        for (i, (h, a)) in header_abbr.into_iter().enumerate() {
            header[i] = h.to_string();
            abbr[i] = a.to_string();
        }
        Table {
            header,
            abbr,
            rows: Vec::new(),
        }
    }
}

impl<const N: usize> Table<N> {
    pub(crate) fn push(&mut self, data: [Value; N]) {
        self.rows.push(data);
    }

    /// One line spelling out every abbreviation.
    pub(crate) fn key(&self) -> String {
        self.abbr
            .iter()
            .zip(&self.header)
            .map(|(abbr, header)| format!("{}: {}", abbr, header))
            .join(", ")
    }
}

impl<const N: usize> Display for Table<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let widths = (0..N)
            .map(|i| {
                cells
                    .iter()
                    .map(|row| row[i].len())
                    .chain([self.abbr[i].len()])
                    .max()
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();

        writeln!(f, "{}", line(&self.abbr, &widths))?;
        for row in &cells {
            writeln!(f, "{}", line(row, &widths))?;
        }
        Ok(())
    }
}

fn line(values: &[String], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, &width)| format!("{:>width$}", value, width = width))
        .join("  ")
}

#[derive(Debug, From, Display)]
pub(crate) enum Value {
    Pct1(Pct<1>),
    Str(String),
    U32(u32),
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

#[cfg(test)]
#[test]
fn test() {
    let mut table = Table::new([("At Bats", "AB"), ("Pitch Share", "Share"), ("Pitch", "Type")]);
    table.push(row![12_u32, Pct::<1>::new(1, 4), "Fastball"]);
    table.push(row![3_u32, Pct::<1>(1.0), "Slider"]);
    assert_eq!(table.key(), "AB: At Bats, Share: Pitch Share, Type: Pitch");
    assert_eq!(
        table.to_string(),
        "AB   Share      Type\n12   25.0%  Fastball\n 3  100.0%    Slider\n"
    );
}
