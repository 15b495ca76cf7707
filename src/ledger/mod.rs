//! The ledger aggregate and its derived snapshot.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::{Ledger, LedgerSnapshot};
