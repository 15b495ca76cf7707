//! Records variable daily expenses.
//!
//! Expenses are always accepted once their shape is valid; unlike
//! allocations they are never checked against the remaining balance, only
//! flagged through the daily alert.

use tracing::warn;

use crate::config::BudgetRules;
use crate::core::services::{AlertService, ServiceError, ServiceResult};
use crate::domain::events::ExpenseEntry;
use crate::ledger::Ledger;

pub struct ExpenseService;

#[derive(Debug, Clone, PartialEq)]
/// Outcome of a recorded expense, including the alert for the affected day.
pub struct ExpenseReceipt {
    pub day: u32,
    pub day_total: f64,
    pub daily_alert: bool,
}

impl ExpenseService {
    pub fn record(
        ledger: &mut Ledger,
        rules: &BudgetRules,
        day: u32,
        amount: f64,
        category: Option<String>,
    ) -> ServiceResult<ExpenseReceipt> {
        if !(1..=31).contains(&day) {
            return Err(ServiceError::InvalidDay(day));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(ServiceError::Validation(
                "expense amount must be zero or positive".into(),
            ));
        }

        let day_total = ledger.record_expense_entry(ExpenseEntry {
            day,
            amount,
            category,
        });
        let daily_alert = AlertService::daily_alert(ledger, rules, day);
        if daily_alert {
            warn!(day, day_total, "daily spending alert");
        }
        Ok(ExpenseReceipt {
            day,
            day_total,
            daily_alert,
        })
    }
}
