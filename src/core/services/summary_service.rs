//! Deterministic summary report and spending verdict.
//!
//! The report layout is a compatibility surface for downstream tooling that
//! parses the saved summary text; change it deliberately.

use std::fmt;

use crate::config::BudgetRules;
use crate::domain::common::format_short_date;
use crate::ledger::{Ledger, LedgerSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Overall health verdict for the cycle, in priority order.
pub enum SpendingVerdict {
    NotHealthy,
    Overspent,
    Acceptable,
}

impl fmt::Display for SpendingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpendingVerdict::NotHealthy => "Your spending is NOT healthy.",
            SpendingVerdict::Overspent => "You overspent.",
            SpendingVerdict::Acceptable => "Overall spending is acceptable.",
        };
        f.write_str(label)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Chooses the verdict for a snapshot. The monthly-overspend branch wins
    /// over the negative-remaining branch; the two conditions are evaluated
    /// independently and the first match is returned.
    pub fn evaluate(snapshot: &LedgerSnapshot, income: f64, rules: &BudgetRules) -> SpendingVerdict {
        if snapshot.spent > income * rules.monthly_alert_ratio {
            SpendingVerdict::NotHealthy
        } else if snapshot.remaining < 0.0 {
            SpendingVerdict::Overspent
        } else {
            SpendingVerdict::Acceptable
        }
    }

    /// Composes the full summary text: totals, itemized allocations, and the
    /// evaluation verdict.
    pub fn build_report(ledger: &Ledger, rules: &BudgetRules) -> String {
        let profile = ledger.profile();
        let snapshot = ledger.snapshot();

        let mut lines = vec![
            "=== SPARRWALLET SUMMARY ===".to_string(),
            format!("Income: {:.2}", profile.income),
            format!("Fixed costs: {:.2}", profile.fixed_costs),
            format!("Variable costs: {:.2}", snapshot.total_variable),
            format!("Invested (total): {:.2}", snapshot.total_invested),
            format!("Saved (principal total): {:.2}", snapshot.total_saved_principal),
            format!(
                "Projected savings interest (3m): {:.2}",
                snapshot.total_projected_interest
            ),
            format!("Remaining: {:.2}", snapshot.remaining),
            String::new(),
        ];

        if !ledger.investments().is_empty() {
            lines.push("Investments:".to_string());
            for (index, event) in ledger.investments().iter().enumerate() {
                lines.push(format!(
                    "  {}) Day {}: {} — {:.2}",
                    index + 1,
                    event.day,
                    event.kind,
                    event.amount
                ));
            }
        }

        if !ledger.savings().is_empty() {
            lines.push(String::new());
            lines.push("Savings:".to_string());
            for (index, event) in ledger.savings().iter().enumerate() {
                lines.push(format!(
                    "  {}) Day {}: Saved {:.2} → Interest {:.2} → Maturity {:.2} (Date: {})",
                    index + 1,
                    event.day,
                    event.principal,
                    event.interest,
                    event.maturity_amount,
                    format_short_date(event.maturity_date)
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "Evaluation: {}",
            Self::evaluate(&snapshot, profile.income, rules)
        ));
        lines.push(String::new());
        lines.push("Have a nice day!".to_string());
        lines.join("\n")
    }
}
