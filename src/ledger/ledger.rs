use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::format_short_date,
    events::{ExpenseEntry, InvestmentEvent, SavingsEvent},
    profile::{BudgetProfile, ProfileError},
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Authoritative record of one budget cycle for a single session.
///
/// Entries are append-only; the only way to remove recorded activity is a
/// wholesale [`Ledger::reset`]. Aggregate figures are always derived through
/// [`Ledger::snapshot`] and never stored.
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    profile: BudgetProfile,
    #[serde(default)]
    expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    day_totals: BTreeMap<u32, f64>,
    #[serde(default)]
    investments: Vec<InvestmentEvent>,
    #[serde(default)]
    savings: Vec<SavingsEvent>,
    #[serde(default)]
    log: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
/// Aggregate totals derived from the current ledger state.
pub struct LedgerSnapshot {
    pub total_variable: f64,
    pub total_invested: f64,
    pub total_saved_principal: f64,
    pub total_projected_interest: f64,
    pub spent: f64,
    pub remaining: f64,
    pub remaining_ratio: f64,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            profile: BudgetProfile::default(),
            expenses: Vec::new(),
            day_totals: BTreeMap::new(),
            investments: Vec::new(),
            savings: Vec::new(),
            log: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Replaces the budget profile for the current cycle.
    pub fn set_profile(&mut self, income: f64, fixed_costs: f64) -> Result<(), ProfileError> {
        self.profile = BudgetProfile::new(income, fixed_costs)?;
        self.touch();
        Ok(())
    }

    /// Clears every per-cycle collection. The profile survives; use
    /// [`Ledger::initialize`] to start a cycle with fresh figures.
    pub fn reset(&mut self) {
        self.expenses.clear();
        self.day_totals.clear();
        self.investments.clear();
        self.savings.clear();
        self.log.clear();
        self.touch();
    }

    /// Combined reset + profile replacement, the canonical way to start a
    /// budget cycle. Validates the profile before clearing anything so a
    /// rejected call leaves the ledger untouched.
    pub fn initialize(&mut self, income: f64, fixed_costs: f64) -> Result<(), ProfileError> {
        let profile = BudgetProfile::new(income, fixed_costs)?;
        self.reset();
        self.profile = profile;
        self.log.push("Initialized budget.".to_string());
        Ok(())
    }

    pub fn profile(&self) -> BudgetProfile {
        self.profile
    }

    /// Per-day cumulative expense totals, iterated in day order.
    pub fn daily_totals(&self) -> &BTreeMap<u32, f64> {
        &self.day_totals
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    pub fn investments(&self) -> &[InvestmentEvent] {
        &self.investments
    }

    pub fn savings(&self) -> &[SavingsEvent] {
        &self.savings
    }

    /// Ordered human-readable record of everything applied this cycle.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Appends an expense entry and folds it into the day-indexed totals.
    /// Returns the updated cumulative total for the entry's day.
    pub(crate) fn record_expense_entry(&mut self, entry: ExpenseEntry) -> f64 {
        let day_total = self.day_totals.entry(entry.day).or_insert(0.0);
        *day_total += entry.amount;
        let day_total = *day_total;
        self.expenses.push(entry.clone());
        let total_variable: f64 = self.expenses.iter().map(|e| e.amount).sum();
        self.log.push(format!(
            "+ {:.2} on day {} | variable_total={:.2}",
            entry.amount, entry.day, total_variable
        ));
        self.touch();
        day_total
    }

    pub(crate) fn record_investment(&mut self, event: InvestmentEvent) {
        self.log.push(format!(
            "Invested {} {:.2} on day {}",
            event.kind, event.amount, event.day
        ));
        self.investments.push(event);
        self.touch();
    }

    pub(crate) fn record_savings(&mut self, event: SavingsEvent) {
        self.log.push(format!(
            "Saved {:.2}; maturity {:.2} on {}",
            event.principal,
            event.maturity_amount,
            format_short_date(event.maturity_date)
        ));
        self.savings.push(event);
        self.touch();
    }

    /// Derives the aggregate totals from the current collections. Recomputed
    /// on every call so the result always reflects the latest state.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let total_variable: f64 = self.expenses.iter().map(|e| e.amount).sum();
        let total_invested: f64 = self.investments.iter().map(|e| e.amount).sum();
        let total_saved_principal: f64 = self.savings.iter().map(|e| e.principal).sum();
        let total_projected_interest: f64 = self.savings.iter().map(|e| e.interest).sum();
        let spent =
            self.profile.fixed_costs + total_variable + total_invested + total_saved_principal;
        let remaining = self.profile.income - spent;
        let remaining_ratio = if self.profile.income > 0.0 {
            (remaining / self.profile.income).clamp(0.0, 1.0)
        } else {
            0.0
        };
        LedgerSnapshot {
            total_variable,
            total_invested,
            total_saved_principal,
            total_projected_interest,
            spent,
            remaining,
            remaining_ratio,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
