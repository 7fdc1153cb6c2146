mod day_entry;
mod day_of_week;
mod parameters;
mod policy;
mod rate_table;
mod schedule;

pub use day_entry::{DayEntry, MealBonus, OvertimeInput};
pub use day_of_week::{DayOfWeek, OnCallKind};
pub use parameters::{Parameters, PayRates};
pub use policy::CalculatorPolicy;
pub use rate_table::OvertimeRateTable;
pub use schedule::{Schedule, Week, DAYS_PER_WEEK, WEEKS_PER_PERIOD};
