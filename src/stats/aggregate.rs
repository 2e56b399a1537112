use crate::model::{Cell, DayKey};
use std::collections::BTreeMap;

/// Commit count per day, kept in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    days: BTreeMap<DayKey, u32>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `day` is present without changing an existing count.
    pub fn seed(&mut self, day: DayKey) {
        self.days.entry(day).or_insert(0);
    }

    pub fn increment(&mut self, day: DayKey) {
        *self.days.entry(day).or_insert(0) += 1;
    }

    pub fn get(&self, day: &DayKey) -> Option<u32> {
        self.days.get(day).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = (DayKey, u32)> + '_ {
        self.days.iter().map(|(day, count)| (*day, *count))
    }

    /// Non-zero days, oldest first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.days()
            .filter(|(_, count)| *count > 0)
            .map(|(day, count)| Cell { day, count })
    }

    pub fn total(&self) -> u64 {
        self.days.values().map(|c| *c as u64).sum()
    }
}
