pub mod calculations;
pub mod diagnostics;
pub mod models;

pub use calculations::{DailyPayBreakdown, PayrollCalculator, WeekReport, STANDARD_DAILY_HOURS};
pub use diagnostics::{DiagnosticEntry, DiagnosticLevel, Diagnostics};
pub use models::*;
