//! Core data models
//!
//! - `Money`: cents-based currency amount
//! - `Category`: Income/Expense classification
//! - `Transaction`: a single immutable ledger entry

pub mod category;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use money::Money;
pub use transaction::{format_date, parse_date, Transaction, DATE_FORMAT};
