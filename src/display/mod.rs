//! Terminal output formatting

pub mod report;
pub mod transaction;
