//! Business logic services layered over the ledger aggregate.

pub mod services;
