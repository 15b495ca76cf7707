use chrono::NaiveDate;
use sparr_core::{
    config::{BudgetRules, ConfigManager},
    core::services::{AllocationAction, AllocationService, ExpenseService},
    domain::events::InvestmentKind,
    ledger::Ledger,
    storage::{JsonStorage, StorageBackend},
};
use tempfile::TempDir;

fn populated_ledger() -> Ledger {
    let rules = BudgetRules::default();
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let mut ledger = Ledger::new("Persisted");
    ledger.initialize(2000.0, 500.0).unwrap();
    ExpenseService::record(&mut ledger, &rules, 5, 400.0, Some("groceries".into())).unwrap();
    AllocationService::perform_allocation(
        &mut ledger,
        &rules,
        AllocationAction::Invest(InvestmentKind::StocksEtf),
        100.0,
        today,
    )
    .unwrap();
    AllocationService::perform_allocation(
        &mut ledger,
        &rules,
        AllocationAction::SaveFixedTerm,
        500.0,
        today,
    )
    .unwrap();
    ledger
}

#[test]
fn ledger_round_trips_through_json_storage() {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), None).expect("storage");
    let ledger = populated_ledger();

    storage.save(&ledger, "household 2026").expect("save");
    let loaded = storage.load("household 2026").expect("load");

    assert_eq!(loaded.profile(), ledger.profile());
    assert_eq!(loaded.expenses(), ledger.expenses());
    assert_eq!(loaded.investments(), ledger.investments());
    assert_eq!(loaded.savings(), ledger.savings());
    assert_eq!(loaded.log(), ledger.log());
    // Derived figures are recomputed, never persisted.
    assert_eq!(loaded.snapshot(), ledger.snapshot());
}

#[test]
fn save_to_explicit_path_and_back() {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), None).expect("storage");
    let ledger = populated_ledger();
    let path = temp.path().join("export.json");

    storage.save_to_path(&ledger, &path).expect("save to path");
    let loaded = storage.load_from_path(&path).expect("load from path");
    assert_eq!(loaded.snapshot(), ledger.snapshot());
}

#[test]
fn backups_are_listed_newest_first_and_restorable() {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), Some(3)).expect("storage");
    let ledger = populated_ledger();

    storage.save(&ledger, "cycle").expect("save");
    storage
        .backup(&ledger, "cycle", Some("pre reset"))
        .expect("backup");
    let backups = storage.list_backups("cycle").expect("list");
    assert_eq!(backups.len(), 1);
    assert!(backups[0].contains("pre-reset"));

    let restored = storage.restore("cycle", &backups[0]).expect("restore");
    assert_eq!(restored.snapshot(), ledger.snapshot());
}

#[test]
fn config_round_trips_next_to_ledgers() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("manager");

    let rules = BudgetRules {
        safe_remaining_ratio: 0.30,
        ..BudgetRules::default()
    };
    manager.save(&rules).expect("save rules");
    assert_eq!(manager.load().expect("load rules"), rules);
}
