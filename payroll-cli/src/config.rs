use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use payroll_core::models::CalculatorPolicy;
use serde::{Deserialize, Serialize};

/// Application configuration, read from a TOML file.
///
/// Calculator behaviors that differed between the historical screen
/// variants are pinned here instead of being guessed: the overtime rate
/// table by name, presence gating and daily rounding. A missing file means
/// all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the session store file.
    pub store_file: PathBuf,

    /// Name of the overtime rate table to apply: one of the built-ins
    /// (standard, enhanced, premium) or a table loaded via `rate-loader`.
    pub rate_table: String,

    /// Whether bonuses and overtime require attendance.
    pub presence_gates_bonuses: bool,

    /// Whether each daily result is rounded to two decimal places.
    pub round_daily: bool,

    /// Development mode: debug-level logging and diagnostic mirroring.
    pub dev_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: PathBuf::from("payroll-session.json"),
            rate_table: "standard".to_string(),
            presence_gates_bonuses: true,
            round_daily: false,
            dev_mode: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("cannot parse config file '{}'", path.display()))
    }

    pub fn policy(&self) -> CalculatorPolicy {
        CalculatorPolicy {
            presence_gates_bonuses: self.presence_gates_bonuses,
            round_daily: self.round_daily,
        }
    }
}
