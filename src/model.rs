use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

pub const SCHEMA_VERSION: u32 = 1;

/// Trailing window, in days, for which commits are counted.
pub const WINDOW_DAYS: u32 = 180;

pub const DAY_KEY_FORMAT: &str = "%Y/%m/%d";

/// Calendar day used as the aggregation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Day on which `timestamp` falls in its own UTC offset.
    pub fn of(timestamp: &DateTime<FixedOffset>) -> Self {
        Self(timestamp.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// `None` for zero, which is never rendered.
    pub fn classify(count: u32) -> Option<Self> {
        match count {
            0 => None,
            1..=4 => Some(Band::Low),
            5..=9 => Some(Band::Medium),
            _ => Some(Band::High),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub day: DayKey,
    pub count: u32,
}

impl Cell {
    pub fn band(&self) -> Option<Band> {
        Band::classify(self.count)
    }
}

/// The parts of a commit the scanner looks at.
#[derive(Debug, Clone)]
pub struct AuthoredCommit {
    pub author_email: String,
    pub authored_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCount {
    pub date: DayKey,
    pub commit_count: u32,
}

impl From<Cell> for DayCount {
    fn from(cell: Cell) -> Self {
        Self { date: cell.day, commit_count: cell.count }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub email: String,
    pub window_days: u32,
    pub repositories: Vec<String>,
    pub total_commits: u64,
    pub days: Vec<DayCount>,
}
