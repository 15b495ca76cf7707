pub mod json_backend;

use std::path::Path;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing ledgers.
///
/// Only the profile and the append-only collections are persisted; derived
/// snapshots are always recomputed after loading.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Ledger>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, ledger: &Ledger, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<Ledger>;

    /// Ad-hoc file operations, forwarded to the JSON helpers when not
    /// overridden.
    fn save_to_path(&self, ledger: &Ledger, path: &Path) -> Result<()> {
        json_backend::save_ledger_to_path(ledger, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Ledger> {
        json_backend::load_ledger_from_path(path)
    }
}

pub use json_backend::JsonStorage;
