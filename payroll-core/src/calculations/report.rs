//! Weekly aggregation for the report surface.
//!
//! A [`WeekReport`] is purely derived from one week of entries: bonus-day
//! counts, overtime hours per category and the week's salary total, plus
//! the fixed ordered sequence of labeled lines the export lays out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::daily::PayrollCalculator;
use crate::models::{DayOfWeek, MealBonus, Week};

/// The single fixed currency symbol used for display. No localization.
pub const CURRENCY_SYMBOL: &str = "€";

/// One labeled line of the report, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    fn new(
        label: &str,
        value: String,
    ) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Aggregated summary of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekReport {
    pub driving_days: u32,
    pub extra_meal_days: u32,
    pub off_site_days: u32,
    pub dinner_days: u32,
    pub on_call_days: u32,

    /// Overtime per category in fractional hours (90 minutes is 1.5).
    pub overtime_regular_hours: Decimal,
    pub overtime_night_hours: Decimal,
    pub overtime_holiday_hours: Decimal,

    /// Sum of the seven daily totals.
    pub total: Decimal,
}

impl WeekReport {
    /// The fixed ordered line sequence consumed by the export layout.
    pub fn lines(&self) -> Vec<ReportLine> {
        vec![
            ReportLine::new("Driving days", self.driving_days.to_string()),
            ReportLine::new("Extra meal days", self.extra_meal_days.to_string()),
            ReportLine::new("Off-site days", self.off_site_days.to_string()),
            ReportLine::new("Dinner days", self.dinner_days.to_string()),
            ReportLine::new("On-call days", self.on_call_days.to_string()),
            ReportLine::new(
                "Regular overtime (h)",
                format!("{:.2}", self.overtime_regular_hours),
            ),
            ReportLine::new(
                "Night overtime (h)",
                format!("{:.2}", self.overtime_night_hours),
            ),
            ReportLine::new(
                "Holiday overtime (h)",
                format!("{:.2}", self.overtime_holiday_hours),
            ),
            ReportLine::new(
                "Week total",
                format!("{CURRENCY_SYMBOL} {:.2}", self.total),
            ),
        ]
    }
}

impl PayrollCalculator<'_> {
    /// Aggregates one week: bonus-day counts, overtime hours and the
    /// week's salary total. Purely derived, no side effects.
    pub fn weekly_report(
        &self,
        week: &Week,
    ) -> WeekReport {
        let mut report = WeekReport {
            driving_days: 0,
            extra_meal_days: 0,
            off_site_days: 0,
            dinner_days: 0,
            on_call_days: 0,
            overtime_regular_hours: Decimal::ZERO,
            overtime_night_hours: Decimal::ZERO,
            overtime_holiday_hours: Decimal::ZERO,
            total: Decimal::ZERO,
        };

        for (day, day_of_week) in week.iter().zip(DayOfWeek::ALL) {
            if day.driving {
                report.driving_days += 1;
            }
            match day.meal {
                MealBonus::ExtraMeal => report.extra_meal_days += 1,
                MealBonus::OffSite => report.off_site_days += 1,
                MealBonus::None => {}
            }
            if day.dinner {
                report.dinner_days += 1;
            }
            if day.on_call {
                report.on_call_days += 1;
            }

            report.overtime_regular_hours += day.overtime_regular.as_hours();
            report.overtime_night_hours += day.overtime_night.as_hours();
            report.overtime_holiday_hours += day.overtime_holiday.as_hours();

            report.total += self.daily_pay(day, day_of_week).total;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{
        CalculatorPolicy, DayEntry, OvertimeInput, OvertimeRateTable, Parameters,
    };

    fn test_parameters() -> Parameters {
        Parameters {
            base_hourly_rate: "10".to_string(),
            driving_allowance: "5".to_string(),
            extra_meal_allowance: "6".to_string(),
            off_site_allowance: "22".to_string(),
            dinner_allowance: "8".to_string(),
            on_call_weekday: "12".to_string(),
            on_call_saturday: "18".to_string(),
            on_call_holiday: "25".to_string(),
        }
    }

    fn test_week() -> Week {
        let mut week = Week::default();
        // Monday: full attendance with driving and extra meal.
        week[0] = DayEntry {
            present: true,
            driving: true,
            meal: MealBonus::ExtraMeal,
            ..Default::default()
        };
        // Wednesday: off-site with dinner and 1h30 regular overtime.
        week[2] = DayEntry {
            present: true,
            meal: MealBonus::OffSite,
            dinner: true,
            overtime_regular: OvertimeInput {
                hours: "1".to_string(),
                minutes: "30".to_string(),
            },
            ..Default::default()
        };
        // Saturday: on-call only.
        week[5] = DayEntry {
            present: true,
            on_call: true,
            ..Default::default()
        };
        week
    }

    #[test]
    fn weekly_report_counts_bonus_days() {
        let parameters = test_parameters();
        let rates = parameters.resolve();
        let table = OvertimeRateTable::standard();
        let calculator = PayrollCalculator::new(&rates, &table, CalculatorPolicy::default());

        let report = calculator.weekly_report(&test_week());

        assert_eq!(report.driving_days, 1);
        assert_eq!(report.extra_meal_days, 1);
        assert_eq!(report.off_site_days, 1);
        assert_eq!(report.dinner_days, 1);
        assert_eq!(report.on_call_days, 1);
    }

    #[test]
    fn weekly_report_sums_overtime_hours() {
        let parameters = test_parameters();
        let rates = parameters.resolve();
        let table = OvertimeRateTable::standard();
        let calculator = PayrollCalculator::new(&rates, &table, CalculatorPolicy::default());

        let report = calculator.weekly_report(&test_week());

        assert_eq!(report.overtime_regular_hours, dec!(1.5));
        assert_eq!(report.overtime_night_hours, Decimal::ZERO);
        assert_eq!(report.overtime_holiday_hours, Decimal::ZERO);
    }

    #[test]
    fn weekly_report_total_matches_daily_sum() {
        let parameters = test_parameters();
        let rates = parameters.resolve();
        let table = OvertimeRateTable::standard();
        let calculator = PayrollCalculator::new(&rates, &table, CalculatorPolicy::default());
        let week = test_week();

        let report = calculator.weekly_report(&week);
        let by_days: Decimal = week
            .iter()
            .zip(DayOfWeek::ALL)
            .map(|(day, day_of_week)| calculator.daily_pay(day, day_of_week).total)
            .sum();

        assert_eq!(report.total, by_days);
        // Monday 87, Wednesday 123.25, Saturday 94.
        assert_eq!(report.total, dec!(304.25));
    }

    #[test]
    fn empty_week_reports_all_zero() {
        let parameters = test_parameters();
        let rates = parameters.resolve();
        let table = OvertimeRateTable::standard();
        let calculator = PayrollCalculator::new(&rates, &table, CalculatorPolicy::default());

        let report = calculator.weekly_report(&Week::default());

        assert_eq!(report.total, Decimal::ZERO);
        assert_eq!(report.on_call_days, 0);
    }

    #[test]
    fn lines_keep_the_fixed_order_and_format() {
        let report = WeekReport {
            driving_days: 2,
            extra_meal_days: 0,
            off_site_days: 1,
            dinner_days: 0,
            on_call_days: 3,
            overtime_regular_hours: dec!(1.5),
            overtime_night_hours: Decimal::ZERO,
            overtime_holiday_hours: dec!(0.25),
            total: dec!(412.5),
        };

        let lines = report.lines();
        let labels: Vec<&str> = lines.iter().map(|line| line.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Driving days",
                "Extra meal days",
                "Off-site days",
                "Dinner days",
                "On-call days",
                "Regular overtime (h)",
                "Night overtime (h)",
                "Holiday overtime (h)",
                "Week total",
            ]
        );
        assert_eq!(lines[5].value, "1.50");
        assert_eq!(lines[8].value, "€ 412.50");
    }
}
