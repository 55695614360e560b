//! Date-range filtering and income/expense totals

use chrono::NaiveDate;

use crate::models::{Category, Money, Transaction};

/// Lazily filter transactions to those dated within `[start, end]` inclusive
///
/// The returned iterator preserves ledger order and is `Clone`, so it can be
/// restarted as many times as needed.
pub fn filter_by_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &Transaction> + Clone {
    transactions
        .iter()
        .filter(move |t| t.date >= start && t.date <= end)
}

/// Aggregate totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts
    pub total_expense: Money,
}

impl Summary {
    /// Compute totals over any transaction iterator; all zero for the empty set
    pub fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut summary = Summary::default();
        for txn in transactions {
            match txn.category {
                Category::Income => summary.total_income += txn.amount,
                Category::Expense => summary.total_expense += txn.amount,
            }
        }
        summary
    }

    /// Net savings: income minus expense
    pub fn net_savings(&self) -> Money {
        self.total_income - self.total_expense
    }
}
