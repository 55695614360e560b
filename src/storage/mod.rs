//! Persistence layer: the append-only CSV ledger

pub mod ledger;

pub use ledger::{Ledger, LedgerStore};
