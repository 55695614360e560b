//! Transaction model
//!
//! A ledger entry: date, positive amount, category, and an optional free-form
//! description. Entries are immutable once appended to the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{PennyError, PennyResult};

/// Date format used everywhere: CSV rows, CLI arguments, display
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `dd-mm-yyyy` date string
pub fn parse_date(s: &str) -> PennyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| PennyError::invalid_date(s))
}

/// Format a date as `dd-mm-yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Amount, always positive; the category carries the sign
    pub amount: Money,

    /// Income or Expense
    pub category: Category,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Validate the invariants: amount must be strictly positive
    pub fn validate(&self) -> PennyResult<()> {
        if !self.amount.is_positive() {
            return Err(PennyError::invalid_amount(self.amount.to_decimal_string()));
        }
        Ok(())
    }

    /// Amount with the category's sign applied: income positive, expense negative
    pub fn signed_amount(&self) -> Money {
        match self.category {
            Category::Income => self.amount,
            Category::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>10} {:<7} {}",
            format_date(self.date),
            self.amount.to_string(),
            self.category,
            self.description
        )
    }
}
