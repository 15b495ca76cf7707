//! Safe-zone detection and validated allocation of surplus funds.
//!
//! This is the one strictly validated path in the core: an allocation must
//! fit inside the remaining balance at the moment it is performed, and a
//! rejected action leaves the ledger untouched.

use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::config::BudgetRules;
use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::events::{InvestmentEvent, InvestmentKind, SavingsEvent};
use crate::ledger::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Discretionary action requested by the hosting surface.
pub enum AllocationAction {
    Invest(InvestmentKind),
    SaveFixedTerm,
}

#[derive(Debug, Clone, PartialEq)]
/// Confirmation returned for a successfully applied allocation.
pub enum AllocationRecord {
    Invested {
        day: u32,
        kind: InvestmentKind,
        amount: f64,
    },
    Saved {
        day: u32,
        principal: f64,
        interest: f64,
        maturity_amount: f64,
        maturity_date: NaiveDate,
    },
}

pub struct AllocationService;

impl AllocationService {
    /// True when the remaining balance leaves room for discretionary
    /// allocation: income is positive and more than the configured share of
    /// it is still unspent. Exactly at the threshold is not safe.
    pub fn is_safe_zone(ledger: &Ledger, rules: &BudgetRules) -> bool {
        let profile = ledger.profile();
        profile.income > 0.0
            && ledger.snapshot().remaining > profile.income * rules.safe_remaining_ratio
    }

    /// Validates and applies an allocation dated `today`.
    ///
    /// The amount is re-validated here even when the surface already showed
    /// a safe zone; the balance may have moved since. Accepts an amount
    /// equal to the remaining balance, rejects zero, negative, and anything
    /// above it.
    pub fn perform_allocation(
        ledger: &mut Ledger,
        rules: &BudgetRules,
        action: AllocationAction,
        amount: f64,
        today: NaiveDate,
    ) -> ServiceResult<AllocationRecord> {
        let remaining = ledger.snapshot().remaining;
        if !amount.is_finite() || amount <= 0.0 || amount > remaining {
            warn!(amount, remaining, "allocation rejected");
            return Err(ServiceError::InvalidAmount { remaining });
        }

        let day = today.day();
        match action {
            AllocationAction::Invest(kind) => {
                ledger.record_investment(InvestmentEvent { day, kind, amount });
                info!(%kind, amount, day, "investment recorded");
                Ok(AllocationRecord::Invested { day, kind, amount })
            }
            AllocationAction::SaveFixedTerm => {
                let event = SavingsEvent::open(
                    amount,
                    rules.savings_rate_3m,
                    today,
                    rules.savings_term_months,
                );
                let record = AllocationRecord::Saved {
                    day: event.day,
                    principal: event.principal,
                    interest: event.interest,
                    maturity_amount: event.maturity_amount,
                    maturity_date: event.maturity_date,
                };
                info!(
                    principal = event.principal,
                    maturity = event.maturity_amount,
                    "fixed-term savings recorded"
                );
                ledger.record_savings(event);
                Ok(record)
            }
        }
    }
}
