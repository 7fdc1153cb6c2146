use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named set of overtime surcharges, expressed as decimal fractions
/// (0.15 means a 15% surcharge on the base hourly rate).
///
/// The payroll policy owner pins one table by name in the configuration;
/// the calculator never guesses. Besides the built-in candidates below,
/// custom tables can be loaded from CSV into the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRateTable {
    pub name: String,
    pub regular: Decimal,
    pub night: Decimal,
    pub holiday: Decimal,
}

impl OvertimeRateTable {
    /// 15% / 30% / 40% — the rate set of the most complete screen variant.
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            regular: Decimal::new(15, 2),
            night: Decimal::new(30, 2),
            holiday: Decimal::new(40, 2),
        }
    }

    /// 22% / 40% / 50%.
    pub fn enhanced() -> Self {
        Self {
            name: "enhanced".to_string(),
            regular: Decimal::new(22, 2),
            night: Decimal::new(40, 2),
            holiday: Decimal::new(50, 2),
        }
    }

    /// 25% / 50% / 50%.
    pub fn premium() -> Self {
        Self {
            name: "premium".to_string(),
            regular: Decimal::new(25, 2),
            night: Decimal::new(50, 2),
            holiday: Decimal::new(50, 2),
        }
    }

    /// Looks up one of the built-in tables by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "enhanced" => Some(Self::enhanced()),
            "premium" => Some(Self::premium()),
            _ => None,
        }
    }

    pub fn builtin_names() -> [&'static str; 3] {
        ["standard", "enhanced", "premium"]
    }
}
