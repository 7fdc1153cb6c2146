//! Shared helpers for payroll calculations: financial rounding and the
//! parse-or-zero coercion applied to free-text form fields.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding, the standard financial convention (0.005 rounds away from
/// zero to 0.01).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(76.005)), dec!(76.01));
/// assert_eq!(round_half_up(dec!(76.004)), dec!(76.00));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Coerces a free-text amount to a decimal: trimmed, parsed, and defaulting
/// to zero when empty or unparseable. Form fields are free text and a
/// malformed value is never an error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("12.50"), dec!(12.50));
/// assert_eq!(parse_amount(""), dec!(0));
/// assert_eq!(parse_amount("abc"), dec!(0));
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}
