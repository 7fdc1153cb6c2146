use serde::{Deserialize, Serialize};

/// Optional calculator behaviors that differ between the historical screen
/// variants. One calculator with a policy replaces the near-duplicate
/// screens; the defaults follow the most complete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorPolicy {
    /// When true, every bonus and overtime contribution requires
    /// `present == true`; only an empty day pays nothing otherwise.
    pub presence_gates_bonuses: bool,

    /// When true, each daily result is rounded half-up to two decimal
    /// places. When false, full precision is kept until display.
    pub round_daily: bool,
}

impl Default for CalculatorPolicy {
    fn default() -> Self {
        Self {
            presence_gates_bonuses: true,
            round_daily: false,
        }
    }
}
