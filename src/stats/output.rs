use super::Aggregate;
use crate::error::Result;
use crate::model::{Band, Cell, DayCount, StatsOutput, SCHEMA_VERSION, WINDOW_DAYS};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::PathBuf;

const RESET: &str = "\x1b[0m";

/// Turns a cell into one line of output, without the newline.
pub trait CellFormatter {
    fn format_cell(&self, cell: &Cell) -> String;
}

/// Terminal cell with a background color per band.
pub struct AnsiFormatter;

impl AnsiFormatter {
    pub fn escape(band: Option<Band>) -> &'static str {
        match band {
            None => "\x1b[0;37;30m",
            Some(Band::Low) => "\x1b[1;30;47m",
            Some(Band::Medium) => "\x1b[1;30;43m",
            Some(Band::High) => "\x1b[1;30;42m",
        }
    }
}

impl CellFormatter for AnsiFormatter {
    fn format_cell(&self, cell: &Cell) -> String {
        format!(
            "{} {}({}) {}",
            Self::escape(cell.band()),
            cell.day,
            cell.count,
            RESET
        )
    }
}

pub struct PlainFormatter;

impl CellFormatter for PlainFormatter {
    fn format_cell(&self, cell: &Cell) -> String {
        format!("{}({})", cell.day, cell.count)
    }
}

/// One line per non-zero day, oldest first.
pub fn render<W: Write>(
    aggregate: &Aggregate,
    formatter: &dyn CellFormatter,
    out: &mut W,
) -> Result<()> {
    for cell in aggregate.cells() {
        writeln!(out, "{}", formatter.format_cell(&cell))?;
    }
    Ok(())
}

pub fn output_json<W: Write>(
    aggregate: &Aggregate,
    email: &str,
    repos: &[PathBuf],
    generated_at: DateTime<Utc>,
    out: &mut W,
) -> Result<()> {
    let output = StatsOutput {
        version: SCHEMA_VERSION,
        generated_at,
        email: email.to_string(),
        window_days: WINDOW_DAYS,
        repositories: repos.iter().map(|p| p.to_string_lossy().to_string()).collect(),
        total_commits: aggregate.total(),
        days: aggregate.cells().map(DayCount::from).collect(),
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

pub fn output_ndjson<W: Write>(aggregate: &Aggregate, out: &mut W) -> Result<()> {
    for cell in aggregate.cells() {
        writeln!(out, "{}", serde_json::to_string(&DayCount::from(cell))?)?;
    }
    Ok(())
}
