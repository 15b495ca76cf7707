use std::sync::Once;
use std::{env, path::PathBuf};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".sparr_core";
const LEDGER_DIR: &str = "ledgers";
const BACKUP_DIR: &str = "backups";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("sparr_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.sparr_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SPARR_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed ledgers directory.
pub fn ledgers_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(LEDGER_DIR)
}

/// Base directory for backup snapshots.
pub fn backups_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

/// Path to the threshold configuration file.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
