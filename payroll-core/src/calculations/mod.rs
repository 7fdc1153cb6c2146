//! Salary calculation logic for the four-week pay period.
//!
//! Everything here is pure: the calculator borrows its configuration and
//! maps day entries to amounts with no hidden state, so recomputing with
//! unchanged inputs always yields the identical value.

pub mod common;
pub mod daily;
pub mod report;

pub use daily::{DailyPayBreakdown, PayrollCalculator, STANDARD_DAILY_HOURS};
pub use report::WeekReport;
