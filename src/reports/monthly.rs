//! Per-month income/expense grouping for chart input

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Money, Transaction};

/// A calendar month key, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Income and expense totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthTotals {
    pub income: Money,
    pub expense: Money,
}

impl MonthTotals {
    /// Net for the month: income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Group transactions into per-month income/expense totals
///
/// The map is ordered chronologically; months with no transactions are absent.
pub fn group_by_month<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> BTreeMap<YearMonth, MonthTotals> {
    let mut months: BTreeMap<YearMonth, MonthTotals> = BTreeMap::new();
    for txn in transactions {
        let totals = months.entry(YearMonth::of(txn.date)).or_default();
        match txn.category {
            Category::Income => totals.income += txn.amount,
            Category::Expense => totals.expense += txn.amount,
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(d: u32, m: u32, y: i32, cents: i64, category: Category) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
    }

    #[test]
    fn test_year_month_display() {
        let ym = YearMonth { year: 2025, month: 3 };
        assert_eq!(ym.to_string(), "2025-03");
    }

    #[test]
    fn test_group_by_month_totals() {
        let ledger = vec![
            txn(1, 11, 2025, 100_000, Category::Income),
            txn(15, 11, 2025, 30_000, Category::Expense),
            txn(1, 12, 2025, 100_000, Category::Income),
            txn(5, 12, 2025, 20_000, Category::Expense),
            txn(20, 12, 2025, 10_000, Category::Expense),
        ];

        let months = group_by_month(&ledger);
        assert_eq!(months.len(), 2);

        let nov = months[&YearMonth { year: 2025, month: 11 }];
        assert_eq!(nov.income, Money::from_cents(100_000));
        assert_eq!(nov.expense, Money::from_cents(30_000));
        assert_eq!(nov.net(), Money::from_cents(70_000));

        let dec = months[&YearMonth { year: 2025, month: 12 }];
        assert_eq!(dec.expense, Money::from_cents(30_000));
    }

    #[test]
    fn test_group_by_month_is_chronological() {
        let ledger = vec![
            txn(1, 1, 2026, 100, Category::Income),
            txn(1, 12, 2025, 100, Category::Income),
            txn(1, 2, 2026, 100, Category::Income),
        ];

        let keys: Vec<String> = group_by_month(&ledger).keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["2025-12", "2026-01", "2026-02"]);
    }

    #[test]
    fn test_group_by_month_empty() {
        assert!(group_by_month(&[]).is_empty());
    }
}
