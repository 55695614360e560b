//! Transaction register formatting

use crate::models::{format_date, Transaction};

use super::report::{separator, truncate};

/// Format transactions as a plain-text register table
///
/// Rows appear in the order given (ledger order for unfiltered output).
pub fn format_register(transactions: &[Transaction]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:>12} {:<8} {}\n",
        "Date", "Amount", "Category", "Description"
    ));
    out.push_str(&separator(60));
    out.push('\n');

    for txn in transactions {
        out.push_str(&format!(
            "{:<12} {:>12} {:<8} {}\n",
            format_date(txn.date),
            txn.amount.to_string(),
            txn.category.to_string(),
            truncate(&txn.description, 30)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_register_contains_rows_in_order() {
        let txns = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                Money::from_cents(100_000),
                Category::Income,
                "salary",
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 12, 5).unwrap(),
                Money::from_cents(20_000),
                Category::Expense,
                "groceries",
            ),
        ];

        let table = format_register(&txns);
        assert!(table.contains("01-12-2025"));
        assert!(table.contains("$1000.00"));
        assert!(table.contains("groceries"));

        let salary_pos = table.find("salary").unwrap();
        let groceries_pos = table.find("groceries").unwrap();
        assert!(salary_pos < groceries_pos);
    }

    #[test]
    fn test_register_header_only_when_empty() {
        let table = format_register(&[]);
        assert!(table.contains("Date"));
        assert_eq!(table.lines().count(), 2);
    }
}
