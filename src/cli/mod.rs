//! CLI command handlers

pub mod generate;
pub mod report;
pub mod transaction;

pub use generate::handle_generate;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, parse_range, TransactionCommands};
