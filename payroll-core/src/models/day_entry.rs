use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::parse_amount;

/// Meal/out-of-office bonus selection for one day.
///
/// At most one of the two bonuses applies per day; the enum makes the
/// exclusivity structural instead of leaving it to the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealBonus {
    #[default]
    None,
    ExtraMeal,
    OffSite,
}

/// One overtime entry as typed into the form: hours and minutes, both free
/// text. Minutes are deliberately not clamped to `< 60`; a value of 90
/// contributes 1.5 hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeInput {
    pub hours: String,
    pub minutes: String,
}

impl OvertimeInput {
    /// Converts the entry to fractional hours: `hours + minutes / 60`.
    /// Fields that do not parse count as zero.
    pub fn as_hours(&self) -> Decimal {
        parse_amount(&self.hours) + parse_amount(&self.minutes) / Decimal::from(60)
    }

    /// Whether both fields are still at their empty defaults.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty() && self.minutes.is_empty()
    }
}

/// One calendar day within a week of the pay period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Standard attendance; gates the base daily wage.
    pub present: bool,

    /// Driving duty.
    pub driving: bool,

    /// Meal or off-site bonus selection.
    pub meal: MealBonus,

    /// On-call duty, compensated at a day-type-specific flat rate.
    pub on_call: bool,

    /// Dinner bonus, independent of the meal/off-site selection.
    pub dinner: bool,

    pub overtime_regular: OvertimeInput,
    pub overtime_night: OvertimeInput,
    pub overtime_holiday: OvertimeInput,
}

impl DayEntry {
    /// Whether the user entered anything at all for this day. Drives the
    /// week indicator in the front end.
    pub fn has_data(&self) -> bool {
        self.present
            || self.driving
            || self.meal != MealBonus::None
            || self.on_call
            || self.dinner
            || !self.overtime_regular.is_empty()
            || !self.overtime_night.is_empty()
            || !self.overtime_holiday.is_empty()
    }
}
