use serde::{Deserialize, Serialize};

use crate::models::{DayEntry, DayOfWeek};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_PERIOD: usize = 4;

/// One week of the pay period: exactly seven entries, index 0 (Monday)
/// through 6 (Sunday).
pub type Week = [DayEntry; DAYS_PER_WEEK];

/// A full pay period: exactly four weeks, 28 days. Created all-empty and
/// mutated field by field as the user edits; a reset replaces a whole week
/// (or the whole schedule) with defaults, never a part of one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub weeks: [Week; WEEKS_PER_PERIOD],
}

impl Schedule {
    /// Iterates every day of the period together with its day of week.
    pub fn days(&self) -> impl Iterator<Item = (&DayEntry, DayOfWeek)> {
        self.weeks
            .iter()
            .flat_map(|week| week.iter().zip(DayOfWeek::ALL))
    }

    /// Replaces one week with defaults. Out-of-range indices are ignored.
    pub fn reset_week(&mut self, week_index: usize) {
        if let Some(week) = self.weeks.get_mut(week_index) {
            *week = Week::default();
        }
    }

    /// Replaces the whole schedule with defaults.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Whether a week contains any user-entered data.
    pub fn week_has_data(&self, week_index: usize) -> bool {
        self.weeks
            .get(week_index)
            .is_some_and(|week| week.iter().any(DayEntry::has_data))
    }
}
