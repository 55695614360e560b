//! Transaction category
//!
//! Every ledger entry is either income or an expense. The CSV stores the
//! full literal (`Income` / `Expense`); interactive input also accepts the
//! single-letter shorthand.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PennyError;

/// Classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// The literal stored in the CSV column
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Both categories, in display order
    pub const ALL: [Category; 2] = [Category::Income, Category::Expense];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PennyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("income") || s.eq_ignore_ascii_case("i") => {
                Ok(Self::Income)
            }
            s if s.eq_ignore_ascii_case("expense") || s.eq_ignore_ascii_case("e") => {
                Ok(Self::Expense)
            }
            other => Err(PennyError::invalid_category(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!("Income".parse::<Category>().unwrap(), Category::Income);
        assert_eq!("Expense".parse::<Category>().unwrap(), Category::Expense);
        assert_eq!("expense".parse::<Category>().unwrap(), Category::Expense);
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!("I".parse::<Category>().unwrap(), Category::Income);
        assert_eq!("e".parse::<Category>().unwrap(), Category::Expense);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("Savings".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_matches_csv_literal() {
        assert_eq!(Category::Income.to_string(), "Income");
        assert_eq!(Category::Expense.to_string(), "Expense");
    }
}
