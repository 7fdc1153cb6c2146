//! Daily salary computation.
//!
//! One day's pay is the sum of up to seven independent contributions:
//!
//! | Contribution | Condition | Amount |
//! |--------------|-----------|--------|
//! | Base wage | `present` | `base_hourly_rate × 7.6` |
//! | Driving | `driving` | `driving_allowance` |
//! | Meal | `meal` selection | `extra_meal_allowance` or `off_site_allowance` |
//! | Dinner | `dinner` | `dinner_allowance` |
//! | On-call | `on_call` | weekday, Saturday or holiday rate by day of week |
//! | Overtime ×3 | hours entered | `hours × base_hourly_rate × (1 + surcharge)` |
//!
//! The surcharges come from the pinned [`OvertimeRateTable`]; which
//! contributions require presence is decided by the [`CalculatorPolicy`].
//!
//! # Example
//!
//! ```
//! use payroll_core::{
//!     CalculatorPolicy, DayEntry, DayOfWeek, OvertimeRateTable, Parameters, PayrollCalculator,
//! };
//! use rust_decimal_macros::dec;
//!
//! let parameters = Parameters {
//!     base_hourly_rate: "10".to_string(),
//!     ..Default::default()
//! };
//! let rates = parameters.resolve();
//! let table = OvertimeRateTable::standard();
//! let calculator = PayrollCalculator::new(&rates, &table, CalculatorPolicy::default());
//!
//! let day = DayEntry {
//!     present: true,
//!     ..Default::default()
//! };
//!
//! assert_eq!(calculator.daily_pay(&day, DayOfWeek::Monday).total, dec!(76.0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::{
    CalculatorPolicy, DayEntry, DayOfWeek, MealBonus, OnCallKind, OvertimeInput, OvertimeRateTable,
    PayRates, Schedule,
};

/// Standard working day: 7 hours 36 minutes.
pub const STANDARD_DAILY_HOURS: Decimal = Decimal::from_parts(76, 0, 0, false, 1);

/// One day's pay split into its contributions. All amounts are zero or
/// positive for non-negative inputs; `total` is their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPayBreakdown {
    pub base: Decimal,
    pub driving: Decimal,
    pub meal: Decimal,
    pub dinner: Decimal,
    pub on_call: Decimal,
    pub overtime_regular: Decimal,
    pub overtime_night: Decimal,
    pub overtime_holiday: Decimal,
    pub total: Decimal,
}

/// Calculator for one pay period under a fixed configuration.
///
/// Stateless per invocation: it borrows the resolved pay rates, the pinned
/// overtime rate table and the policy, and every method is a pure function
/// of its arguments.
#[derive(Debug, Clone)]
pub struct PayrollCalculator<'a> {
    rates: &'a PayRates,
    overtime: &'a OvertimeRateTable,
    policy: CalculatorPolicy,
}

impl<'a> PayrollCalculator<'a> {
    pub fn new(
        rates: &'a PayRates,
        overtime: &'a OvertimeRateTable,
        policy: CalculatorPolicy,
    ) -> Self {
        Self {
            rates,
            overtime,
            policy,
        }
    }

    pub fn rates(&self) -> &PayRates {
        self.rates
    }

    pub fn overtime_table(&self) -> &OvertimeRateTable {
        self.overtime
    }

    pub fn policy(&self) -> CalculatorPolicy {
        self.policy
    }

    /// Computes one day's pay, split into its contributions.
    ///
    /// There are no error conditions: malformed numeric input has already
    /// been coerced to zero and the result is always a number.
    pub fn daily_pay(
        &self,
        day: &DayEntry,
        day_of_week: DayOfWeek,
    ) -> DailyPayBreakdown {
        let base = if day.present {
            self.rates.base_hourly_rate * STANDARD_DAILY_HOURS
        } else {
            Decimal::ZERO
        };

        // The historical screens disagree on whether bonuses require
        // attendance; the policy pins one behavior for the whole period.
        let bonuses_apply = day.present || !self.policy.presence_gates_bonuses;

        let mut breakdown = DailyPayBreakdown {
            base,
            driving: Decimal::ZERO,
            meal: Decimal::ZERO,
            dinner: Decimal::ZERO,
            on_call: Decimal::ZERO,
            overtime_regular: Decimal::ZERO,
            overtime_night: Decimal::ZERO,
            overtime_holiday: Decimal::ZERO,
            total: Decimal::ZERO,
        };

        if bonuses_apply {
            if day.driving {
                breakdown.driving = self.rates.driving_allowance;
            }

            breakdown.meal = match day.meal {
                MealBonus::None => Decimal::ZERO,
                MealBonus::ExtraMeal => self.rates.extra_meal_allowance,
                MealBonus::OffSite => self.rates.off_site_allowance,
            };

            if day.dinner {
                breakdown.dinner = self.rates.dinner_allowance;
            }

            if day.on_call {
                breakdown.on_call = match day_of_week.on_call_kind() {
                    OnCallKind::Weekday => self.rates.on_call_weekday,
                    OnCallKind::Saturday => self.rates.on_call_saturday,
                    OnCallKind::Holiday => self.rates.on_call_holiday,
                };
            }

            breakdown.overtime_regular =
                self.overtime_pay(&day.overtime_regular, self.overtime.regular);
            breakdown.overtime_night = self.overtime_pay(&day.overtime_night, self.overtime.night);
            breakdown.overtime_holiday =
                self.overtime_pay(&day.overtime_holiday, self.overtime.holiday);
        }

        let total = breakdown.base
            + breakdown.driving
            + breakdown.meal
            + breakdown.dinner
            + breakdown.on_call
            + breakdown.overtime_regular
            + breakdown.overtime_night
            + breakdown.overtime_holiday;

        breakdown.total = if self.policy.round_daily {
            round_half_up(total)
        } else {
            total
        };

        breakdown
    }

    /// Sums `daily_pay` over all 28 days of the period. A pure fold: no
    /// day depends on any other.
    pub fn total(
        &self,
        schedule: &Schedule,
    ) -> Decimal {
        schedule
            .days()
            .map(|(day, day_of_week)| self.daily_pay(day, day_of_week).total)
            .sum()
    }

    fn overtime_pay(
        &self,
        input: &OvertimeInput,
        surcharge: Decimal,
    ) -> Decimal {
        input.as_hours() * self.rates.base_hourly_rate * (Decimal::ONE + surcharge)
    }
}
