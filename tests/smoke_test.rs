use chrono::NaiveDate;
use sparr_core::{
    config::BudgetRules,
    core::services::{AllocationAction, AllocationService, ExpenseService, SummaryService},
    init,
    ledger::Ledger,
};

#[test]
fn budget_cycle_smoke() {
    init();

    let rules = BudgetRules::default();
    let mut ledger = Ledger::new("SmokeTest");
    ledger.initialize(3000.0, 800.0).unwrap();

    ExpenseService::record(&mut ledger, &rules, 1, 120.0, Some("transport".into())).unwrap();
    AllocationService::perform_allocation(
        &mut ledger,
        &rules,
        AllocationAction::SaveFixedTerm,
        300.0,
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
    )
    .unwrap();

    let report = SummaryService::build_report(&ledger, &rules);
    assert!(report.starts_with("=== SPARRWALLET SUMMARY ==="));
    assert_eq!(ledger.snapshot().remaining, 3000.0 - 800.0 - 120.0 - 300.0);
}
