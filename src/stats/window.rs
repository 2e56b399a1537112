use super::Aggregate;
use crate::model::{DayKey, WINDOW_DAYS};
use chrono::{DateTime, Days, FixedOffset};

/// Seed a zero count for each of the `WINDOW_DAYS + 1` days ending on `now`'s date.
pub fn build_window(now: &DateTime<FixedOffset>) -> Aggregate {
    let today = now.date_naive();
    let mut aggregate = Aggregate::new();

    for offset in 0..=WINDOW_DAYS {
        if let Some(day) = today.checked_sub_days(Days::new(offset as u64)) {
            aggregate.seed(DayKey::new(day));
        }
    }

    aggregate
}
