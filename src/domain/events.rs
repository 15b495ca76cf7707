//! Append-only financial events recorded against a budget cycle.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::add_months;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A single variable expense, kept verbatim for audit alongside the
/// day-indexed accumulation.
pub struct ExpenseEntry {
    pub day: u32,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Supported discretionary investment vehicles.
pub enum InvestmentKind {
    StocksEtf,
    Crypto,
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvestmentKind::StocksEtf => "STOCKS/ETF",
            InvestmentKind::Crypto => "CRYPTO (BTC/ETH)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A validated investment allocation.
pub struct InvestmentEvent {
    pub day: u32,
    pub kind: InvestmentKind,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A fixed-term savings allocation with its projected payout.
pub struct SavingsEvent {
    pub day: u32,
    pub principal: f64,
    pub interest_rate: f64,
    pub interest: f64,
    pub maturity_amount: f64,
    pub maturity_date: NaiveDate,
}

impl SavingsEvent {
    /// Opens a fixed-term savings position: flat interest on the principal,
    /// maturing `term_months` calendar months after `today` (end-of-month
    /// clamped).
    pub fn open(principal: f64, interest_rate: f64, today: NaiveDate, term_months: i32) -> Self {
        let interest = principal * interest_rate;
        Self {
            day: today.day(),
            principal,
            interest_rate,
            interest,
            maturity_amount: principal + interest,
            maturity_date: add_months(today, term_months),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn savings_event_computes_interest_and_maturity() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let event = SavingsEvent::open(500.0, 0.036, today, 3);
        assert_eq!(event.day, 6);
        assert!((event.interest - 18.0).abs() < 1e-9);
        assert!((event.maturity_amount - 518.0).abs() < 1e-9);
        assert_eq!(
            event.maturity_date,
            NaiveDate::from_ymd_opt(2026, 11, 6).unwrap()
        );
    }

    #[test]
    fn savings_maturity_clamps_to_short_months() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
        let event = SavingsEvent::open(100.0, 0.036, today, 3);
        assert_eq!(
            event.maturity_date,
            NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()
        );
    }

    #[test]
    fn investment_kind_labels_match_reports() {
        assert_eq!(InvestmentKind::StocksEtf.to_string(), "STOCKS/ETF");
        assert_eq!(InvestmentKind::Crypto.to_string(), "CRYPTO (BTC/ETH)");
    }

    #[test]
    fn expense_entry_serializes_without_empty_category() {
        let entry = ExpenseEntry {
            day: 5,
            amount: 40.0,
            category: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("category"));
    }
}
