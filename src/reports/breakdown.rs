//! Per-description breakdown and cumulative savings series
//!
//! These feed the pie-style breakdown and the area chart: totals per
//! description within one category, and the running net balance over time.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Category, Money, Transaction};

/// Total per description within one category, sorted by amount descending
///
/// Transactions with an empty description are grouped under
/// `"(no description)"`.
pub fn breakdown_by_description<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    category: Category,
) -> Vec<(String, Money)> {
    let mut totals: HashMap<&str, Money> = HashMap::new();
    for txn in transactions {
        if txn.category == category {
            *totals.entry(txn.description.as_str()).or_default() += txn.amount;
        }
    }

    let mut entries: Vec<(String, Money)> = totals
        .into_iter()
        .map(|(desc, total)| {
            let label = if desc.is_empty() {
                "(no description)".to_string()
            } else {
                desc.to_string()
            };
            (label, total)
        })
        .collect();

    // Largest first; ties broken by label for a stable order
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Running net balance after each transaction, in date order
///
/// Income counts positive, expense negative. Transactions on the same date
/// keep their ledger order.
pub fn cumulative_savings<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<(NaiveDate, Money)> {
    let mut sorted: Vec<&Transaction> = transactions.into_iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut running = Money::zero();
    sorted
        .into_iter()
        .map(|t| {
            running += t.signed_amount();
            (t.date, running)
        })
        .collect()
}
