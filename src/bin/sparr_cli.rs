//! Interactive terminal host for the SparrWallet budget core.
//!
//! Presentation only: every decision is delegated to the services in
//! `sparr_core`.

use chrono::{Datelike, Local};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use sparr_core::{
    config::{BudgetRules, ConfigManager},
    core::services::{
        AlertService, AllocationAction, AllocationRecord, AllocationService, ExpenseService,
        SummaryService,
    },
    domain::{common::format_short_date, events::InvestmentKind},
    init,
    ledger::Ledger,
    storage::{JsonStorage, StorageBackend},
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let theme = ColorfulTheme::default();
    let rules = ConfigManager::new()
        .and_then(|manager| manager.load())
        .unwrap_or_default();
    let mut ledger = Ledger::new("session");

    println!("{}", "SparrWallet - Finance Dashboard".bold());
    println!("Today: {}", format_today());

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&[
                "Initialize / reset budget",
                "Add variable expense",
                "Invest or save surplus",
                "Show daily totals",
                "Show summary report",
                "Save ledger",
                "Load ledger",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match selection {
            0 => initialize_budget(&theme, &mut ledger)?,
            1 => add_expense(&theme, &mut ledger, &rules)?,
            2 => allocate_surplus(&theme, &mut ledger, &rules)?,
            3 => show_daily_totals(&ledger),
            4 => show_summary(&ledger, &rules),
            5 => save_ledger(&theme, &ledger)?,
            6 => load_ledger(&theme, &mut ledger)?,
            _ => break,
        }
    }
    Ok(())
}

fn format_today() -> String {
    format_short_date(Local::now().date_naive())
}

fn initialize_budget(
    theme: &ColorfulTheme,
    ledger: &mut Ledger,
) -> Result<(), Box<dyn std::error::Error>> {
    let income: f64 = Input::with_theme(theme)
        .with_prompt("Monthly income")
        .interact_text()?;
    let fixed_costs: f64 = Input::with_theme(theme)
        .with_prompt("Fixed costs")
        .interact_text()?;

    match ledger.initialize(income, fixed_costs) {
        Ok(()) => println!("{}", "Budget initialized.".green()),
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

fn add_expense(
    theme: &ColorfulTheme,
    ledger: &mut Ledger,
    rules: &BudgetRules,
) -> Result<(), Box<dyn std::error::Error>> {
    let day: u32 = Input::with_theme(theme)
        .with_prompt("Day (1-31)")
        .default(Local::now().date_naive().day())
        .interact_text()?;
    let amount: f64 = Input::with_theme(theme)
        .with_prompt("Amount")
        .interact_text()?;
    let category: String = Input::with_theme(theme)
        .with_prompt("Category (optional)")
        .allow_empty(true)
        .interact_text()?;
    let category = if category.trim().is_empty() {
        None
    } else {
        Some(category.trim().to_string())
    };

    match ExpenseService::record(ledger, rules, day, amount, category) {
        Ok(receipt) => {
            println!("{}", "Expense added.".green());
            if receipt.daily_alert {
                println!(
                    "{}",
                    format!(
                        "Daily alert: day {} > {}% of income.",
                        receipt.day,
                        (rules.daily_alert_ratio * 100.0) as u32
                    )
                    .yellow()
                );
            }
            if AlertService::monthly_alert(ledger, rules) {
                println!(
                    "{}",
                    format!(
                        "Warning: you used more than {}% of monthly income.",
                        (rules.monthly_alert_ratio * 100.0) as u32
                    )
                    .red()
                );
            }
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

fn allocate_surplus(
    theme: &ColorfulTheme,
    ledger: &mut Ledger,
    rules: &BudgetRules,
) -> Result<(), Box<dyn std::error::Error>> {
    if !AllocationService::is_safe_zone(ledger, rules) {
        println!(
            "{}",
            format!(
                "Not in safe zone yet (need > {}% of income remaining).",
                (rules.safe_remaining_ratio * 100.0) as u32
            )
            .yellow()
        );
        return Ok(());
    }

    println!(
        "{}",
        "You have a healthy remaining amount: consider investing or saving.".green()
    );
    let action = Select::with_theme(theme)
        .with_prompt("Allocation")
        .items(&[
            "Invest: Stocks/ETF",
            "Invest: Crypto (BTC/ETH)",
            "Save 3 months @ 3.6%",
        ])
        .default(0)
        .interact()?;
    let amount: f64 = Input::with_theme(theme)
        .with_prompt("Action amount")
        .interact_text()?;

    let action = match action {
        0 => AllocationAction::Invest(InvestmentKind::StocksEtf),
        1 => AllocationAction::Invest(InvestmentKind::Crypto),
        _ => AllocationAction::SaveFixedTerm,
    };

    let today = Local::now().date_naive();
    match AllocationService::perform_allocation(ledger, rules, action, amount, today) {
        Ok(AllocationRecord::Invested { kind, amount, .. }) => {
            println!("{}", format!("Invested {kind} {amount:.2}.").green());
        }
        Ok(AllocationRecord::Saved {
            interest,
            maturity_amount,
            maturity_date,
            ..
        }) => {
            println!(
                "{}",
                format!(
                    "Saved. 3m interest: {:.2}; maturity {:.2} on {}.",
                    interest,
                    maturity_amount,
                    format_short_date(maturity_date)
                )
                .green()
            );
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

fn show_daily_totals(ledger: &Ledger) {
    if ledger.daily_totals().is_empty() {
        println!("No variable expenses yet.");
        return;
    }
    println!("{}", "Daily expenses".bold());
    for (day, total) in ledger.daily_totals() {
        println!("  day {:>2}: {:>10.2}", day, total);
    }
}

fn show_summary(ledger: &Ledger, rules: &BudgetRules) {
    println!("{}", SummaryService::build_report(ledger, rules));
    let snapshot = ledger.snapshot();
    println!(
        "Remaining ratio: {:.0}%",
        snapshot.remaining_ratio * 100.0
    );
}

fn save_ledger(
    theme: &ColorfulTheme,
    ledger: &Ledger,
) -> Result<(), Box<dyn std::error::Error>> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Ledger name")
        .default("session".into())
        .interact_text()?;
    let storage = JsonStorage::new_default()?;
    storage.save(ledger, &name)?;
    println!("{}", format!("Saved `{name}`.").green());
    Ok(())
}

fn load_ledger(
    theme: &ColorfulTheme,
    ledger: &mut Ledger,
) -> Result<(), Box<dyn std::error::Error>> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Ledger name")
        .default("session".into())
        .interact_text()?;
    if !ledger.log().is_empty()
        && !Confirm::with_theme(theme)
            .with_prompt("Discard the current session and load from disk?")
            .default(false)
            .interact()?
    {
        return Ok(());
    }
    let storage = JsonStorage::new_default()?;
    match storage.load(&name) {
        Ok(loaded) => {
            *ledger = loaded;
            println!("{}", format!("Loaded `{name}`.").green());
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}
