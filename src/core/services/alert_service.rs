//! Threshold-based overspend signals derived from ledger state.
//!
//! Both signals are recomputed from the current collections on every call
//! and never persisted.

use crate::config::BudgetRules;
use crate::ledger::Ledger;

pub struct AlertService;

impl AlertService {
    /// True when the cumulative amount recorded for `day` strictly exceeds
    /// the daily share of income allowed by the rules. Exactly at the
    /// threshold does not fire.
    pub fn daily_alert(ledger: &Ledger, rules: &BudgetRules, day: u32) -> bool {
        let day_total = ledger.daily_totals().get(&day).copied().unwrap_or(0.0);
        day_total > ledger.profile().income * rules.daily_alert_ratio
    }

    /// True when total spend for the cycle, allocations included, strictly
    /// exceeds the monthly share of income allowed by the rules.
    pub fn monthly_alert(ledger: &Ledger, rules: &BudgetRules) -> bool {
        let snapshot = ledger.snapshot();
        snapshot.spent > ledger.profile().income * rules.monthly_alert_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ExpenseService;

    fn ledger_with_income(income: f64, fixed_costs: f64) -> Ledger {
        let mut ledger = Ledger::new("Alerts");
        ledger.initialize(income, fixed_costs).unwrap();
        ledger
    }

    #[test]
    fn daily_alert_fires_strictly_above_threshold() {
        let rules = BudgetRules::default();
        let mut ledger = ledger_with_income(1000.0, 0.0);
        ExpenseService::record(&mut ledger, &rules, 5, 150.0, None).unwrap();
        assert!(!AlertService::daily_alert(&ledger, &rules, 5));

        ExpenseService::record(&mut ledger, &rules, 5, 0.01, None).unwrap();
        assert!(AlertService::daily_alert(&ledger, &rules, 5));
    }

    #[test]
    fn daily_alert_is_scoped_to_one_day() {
        let rules = BudgetRules::default();
        let mut ledger = ledger_with_income(1000.0, 0.0);
        ExpenseService::record(&mut ledger, &rules, 5, 400.0, None).unwrap();
        assert!(AlertService::daily_alert(&ledger, &rules, 5));
        assert!(!AlertService::daily_alert(&ledger, &rules, 6));
    }

    #[test]
    fn monthly_alert_fires_above_the_monthly_share() {
        let rules = BudgetRules::default();
        let mut ledger = ledger_with_income(1000.0, 850.0);
        assert!(!AlertService::monthly_alert(&ledger, &rules));

        // Fixed 850 + variable 100 = 950 > 900.
        ExpenseService::record(&mut ledger, &rules, 3, 100.0, None).unwrap();
        assert!(AlertService::monthly_alert(&ledger, &rules));
    }

    #[test]
    fn alternate_thresholds_are_honored() {
        let rules = BudgetRules {
            daily_alert_ratio: 0.5,
            ..BudgetRules::default()
        };
        let mut ledger = ledger_with_income(100.0, 0.0);
        ExpenseService::record(&mut ledger, &rules, 1, 40.0, None).unwrap();
        assert!(!AlertService::daily_alert(&ledger, &rules, 1));
        ExpenseService::record(&mut ledger, &rules, 1, 20.0, None).unwrap();
        assert!(AlertService::daily_alert(&ledger, &rules, 1));
    }
}
