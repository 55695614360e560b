//! Query and summary engine
//!
//! Filters the ledger by date range and computes the aggregates the reports
//! and charts consume: income/expense totals, per-month groupings,
//! per-description breakdowns, and the cumulative savings series.

pub mod breakdown;
pub mod monthly;
pub mod summary;

pub use breakdown::{breakdown_by_description, cumulative_savings};
pub use monthly::{group_by_month, MonthTotals, YearMonth};
pub use summary::{filter_by_range, Summary};
