//! Threshold and rate configuration for the budget engine.
//!
//! Every decision function reads these values instead of literal constants,
//! so hosts and tests can run with alternate thresholds.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::utils::{app_data_dir, config_file_in};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetRules {
    /// A single day's spending above this share of income raises the daily alert.
    pub daily_alert_ratio: f64,
    /// Total cycle spend above this share of income raises the monthly alert.
    pub monthly_alert_ratio: f64,
    /// Allocations are advised only while remaining exceeds this share of income.
    pub safe_remaining_ratio: f64,
    /// Flat interest rate applied to fixed-term savings.
    pub savings_rate_3m: f64,
    /// Length of the fixed savings term, in calendar months.
    pub savings_term_months: i32,
}

impl Default for BudgetRules {
    fn default() -> Self {
        Self {
            daily_alert_ratio: 0.15,
            monthly_alert_ratio: 0.90,
            safe_remaining_ratio: 0.20,
            savings_rate_3m: 0.036,
            savings_term_months: 3,
        }
    }
}

/// Loads and saves [`BudgetRules`] as JSON under the app data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, LedgerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored rules, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<BudgetRules, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(BudgetRules::default())
        }
    }

    pub fn save(&self, rules: &BudgetRules) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(rules)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
