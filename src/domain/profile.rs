use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
/// Monthly income and fixed costs for the active budget cycle.
///
/// Set once per reset cycle and replaced wholesale; individual fields are
/// never edited in place.
pub struct BudgetProfile {
    pub income: f64,
    pub fixed_costs: f64,
}

impl BudgetProfile {
    pub fn new(income: f64, fixed_costs: f64) -> Result<Self, ProfileError> {
        if !income.is_finite() || income < 0.0 {
            return Err(ProfileError::NegativeIncome);
        }
        if !fixed_costs.is_finite() || fixed_costs < 0.0 {
            return Err(ProfileError::NegativeFixedCosts);
        }
        Ok(Self {
            income,
            fixed_costs,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`BudgetProfile`] values.
pub enum ProfileError {
    NegativeIncome,
    NegativeFixedCosts,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NegativeIncome => f.write_str("monthly income must be zero or positive"),
            ProfileError::NegativeFixedCosts => {
                f.write_str("fixed costs must be zero or positive")
            }
        }
    }
}

impl std::error::Error for ProfileError {}
