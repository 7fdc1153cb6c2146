use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::parse_amount;

/// Base pay configuration as entered by the user.
///
/// Every field is free text, exactly as it is persisted: the form accepts
/// whatever the user types and coercion happens when the field is resolved.
/// Unparseable or empty input counts as zero, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub base_hourly_rate: String,
    pub driving_allowance: String,
    pub extra_meal_allowance: String,
    pub off_site_allowance: String,
    pub dinner_allowance: String,
    pub on_call_weekday: String,
    pub on_call_saturday: String,
    pub on_call_holiday: String,
}

impl Parameters {
    /// Coerces every field into a typed currency amount.
    ///
    /// This never fails: fields that do not parse as a decimal number
    /// resolve to zero.
    pub fn resolve(&self) -> PayRates {
        PayRates {
            base_hourly_rate: parse_amount(&self.base_hourly_rate),
            driving_allowance: parse_amount(&self.driving_allowance),
            extra_meal_allowance: parse_amount(&self.extra_meal_allowance),
            off_site_allowance: parse_amount(&self.off_site_allowance),
            dinner_allowance: parse_amount(&self.dinner_allowance),
            on_call_weekday: parse_amount(&self.on_call_weekday),
            on_call_saturday: parse_amount(&self.on_call_saturday),
            on_call_holiday: parse_amount(&self.on_call_holiday),
        }
    }
}

/// Pay parameters resolved to typed currency amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// Currency per hour of standard work.
    pub base_hourly_rate: Decimal,

    /// Flat bonus for a day with driving duty.
    pub driving_allowance: Decimal,

    /// Flat bonus when the extra meal option is selected.
    pub extra_meal_allowance: Decimal,

    /// Flat bonus when the off-site option is selected.
    pub off_site_allowance: Decimal,

    /// Flat bonus for a day with the dinner option, independent of the
    /// meal/off-site selection.
    pub dinner_allowance: Decimal,

    /// On-call rate for Monday through Friday.
    pub on_call_weekday: Decimal,

    /// On-call rate for Saturday.
    pub on_call_saturday: Decimal,

    /// On-call rate for Sunday.
    pub on_call_holiday: Decimal,
}
