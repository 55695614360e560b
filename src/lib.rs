//! penny-cli - Terminal-based personal finance tracker
//!
//! Records income and expense transactions in an append-only CSV ledger,
//! filters and summarizes them by date range, and renders charts in the
//! terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, category, transaction)
//! - `storage`: The append-only CSV ledger store
//! - `reports`: Date-range queries and aggregation (summary, monthly, breakdown)
//! - `display`: Plain-text formatting for CLI output
//! - `generator`: Synthetic sample data for demos
//! - `cli`: Command handlers
//! - `tui`: Interactive chart interface

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::{PennyError, PennyResult};
