//! CSV ledger store
//!
//! Persists transactions as a flat CSV file with the header
//! `date,amount,category,description`. Records are append-only: insertion
//! order is file order, and nothing is ever rewritten in place.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{PennyError, PennyResult};
use crate::models::{parse_date, Category, Money, Transaction};

/// CSV column order
const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// The in-memory ledger: every transaction in file order
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Transactions in insertion (file) order
    pub transactions: Vec<Transaction>,
    /// Rows skipped during load because they failed to parse
    pub skipped_rows: usize,
}

impl Ledger {
    /// Number of loaded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True if no transactions were loaded
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Store for the CSV ledger file
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the given ledger file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger file with its header row if it is absent or empty
    pub fn initialize(&self) -> PennyResult<()> {
        let needs_header = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        if needs_header {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PennyError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }

            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_path(&self.path)
                .map_err(|e| {
                    PennyError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
                })?;
            writer.write_record(HEADER)?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Load all transactions from disk in file order
    ///
    /// Returns an empty ledger if the file does not exist. Rows that fail to
    /// parse (bad date, non-positive amount, unknown category) are skipped and
    /// counted in [`Ledger::skipped_rows`].
    pub fn load(&self) -> PennyResult<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::default());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                PennyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut ledger = Ledger::default();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(_) => {
                    ledger.skipped_rows += 1;
                    continue;
                }
            };
            match parse_row(&record) {
                Ok(txn) => ledger.transactions.push(txn),
                Err(_) => ledger.skipped_rows += 1,
            }
        }

        Ok(ledger)
    }

    /// Validate and append one transaction to the ledger file
    ///
    /// Existing records are preserved; the file is initialized first if it
    /// does not exist yet.
    pub fn append(&self, transaction: &Transaction) -> PennyResult<()> {
        transaction.validate()?;
        self.initialize()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                PennyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record([
            crate::models::format_date(transaction.date),
            transaction.amount.to_decimal_string(),
            transaction.category.to_string(),
            transaction.description.clone(),
        ])?;
        writer.flush()?;

        Ok(())
    }
}

/// Parse one CSV row into a transaction
fn parse_row(record: &StringRecord) -> PennyResult<Transaction> {
    let date_str = record
        .get(0)
        .ok_or_else(|| PennyError::Storage("Missing date column".into()))?;
    let amount_str = record
        .get(1)
        .ok_or_else(|| PennyError::Storage("Missing amount column".into()))?;
    let category_str = record
        .get(2)
        .ok_or_else(|| PennyError::Storage("Missing category column".into()))?;
    let description = record.get(3).unwrap_or("").to_string();

    let date = parse_date(date_str)?;
    let amount =
        Money::parse(amount_str).map_err(|_| PennyError::invalid_amount(amount_str))?;
    let category = Category::from_str(category_str)?;

    let txn = Transaction::new(date, amount, category, description);
    txn.validate()?;
    Ok(txn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("finance_data.csv"));
        (temp_dir, store)
    }

    fn txn(d: u32, m: u32, y: i32, cents: i64, category: Category, desc: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Money::from_cents(cents),
            category,
            desc,
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_tmp, store) = store();
        let ledger = store.load().unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.skipped_rows, 0);
    }

    #[test]
    fn test_initialize_writes_header_once() {
        let (_tmp, store) = store();
        store.initialize().unwrap();
        store.initialize().unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "date,amount,category,description\n");
    }

    #[test]
    fn test_append_then_load_round_trips_in_order() {
        let (_tmp, store) = store();

        let txns = vec![
            txn(1, 12, 2025, 100_000, Category::Income, "salary"),
            txn(5, 12, 2025, 20_000, Category::Expense, "groceries"),
            txn(3, 12, 2025, 1_250, Category::Expense, "coffee"),
        ];
        for t in &txns {
            store.append(t).unwrap();
        }

        let ledger = store.load().unwrap();
        assert_eq!(ledger.transactions, txns);
        assert_eq!(ledger.skipped_rows, 0);
    }

    #[test]
    fn test_append_rejects_non_positive_amount() {
        let (_tmp, store) = store();
        let bad = txn(1, 12, 2025, 0, Category::Expense, "");
        assert!(store.append(&bad).is_err());
    }

    #[test]
    fn test_description_with_comma_survives() {
        let (_tmp, store) = store();
        let t = txn(1, 12, 2025, 5_000, Category::Expense, "dinner, drinks");
        store.append(&t).unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger.transactions[0].description, "dinner, drinks");
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let (_tmp, store) = store();
        store.append(&txn(1, 12, 2025, 5_000, Category::Expense, "ok")).unwrap();

        // Inject rows with a bad date, bad amounts, and unknown category
        let mut contents = std::fs::read_to_string(store.path()).unwrap();
        contents.push_str("2025-12-19,10.00,Expense,iso date\n");
        contents.push_str("19-12-2025,ten,Expense,bad amount\n");
        contents.push_str("19-12-2025,1.€5,Expense,non-ascii amount\n");
        contents.push_str("19-12-2025,92233720368547759,Expense,amount too large\n");
        contents.push_str("19-12-2025,10.00,Savings,bad category\n");
        contents.push_str("19-12-2025,10.00,Income,still fine\n");
        std::fs::write(store.path(), contents).unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.skipped_rows, 5);
        assert_eq!(ledger.transactions[1].description, "still fine");
    }

    #[test]
    fn test_empty_description_allowed() {
        let (_tmp, store) = store();
        store.append(&txn(1, 12, 2025, 5_000, Category::Income, "")).unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions[0].description, "");
    }
}
