//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::format_register;
use crate::error::{PennyError, PennyResult};
use crate::models::{parse_date, Category, Money, Transaction};
use crate::reports::{filter_by_range, Summary};
use crate::storage::LedgerStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (positive, e.g., "42.50")
        amount: String,
        /// Category: Income or Expense (or 'I'/'E')
        category: String,
        /// Transaction date (dd-mm-yyyy), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },
    /// List transactions, optionally within a date range
    List {
        /// Start date (dd-mm-yyyy)
        #[arg(long)]
        from: Option<String>,
        /// End date (dd-mm-yyyy)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Parse an optional `[from, to]` pair, defaulting to an unbounded range
pub fn parse_range(from: Option<&str>, to: Option<&str>) -> PennyResult<(NaiveDate, NaiveDate)> {
    let start = match from {
        Some(s) => parse_date(s)?,
        None => NaiveDate::MIN,
    };
    let end = match to {
        Some(s) => parse_date(s)?,
        None => NaiveDate::MAX,
    };
    if start > end {
        return Err(PennyError::Validation(format!(
            "Start date {} is after end date {}",
            crate::models::format_date(start),
            crate::models::format_date(end)
        )));
    }
    Ok((start, end))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> PennyResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|_| PennyError::invalid_amount(&amount))?;
            let category: Category = category.parse()?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = Transaction::new(date, amount, category, description);
            store.append(&txn)?;
            println!("Entry added successfully: {}", txn);
            Ok(())
        }
        TransactionCommands::List { from, to } => {
            let ledger = store.load()?;
            if ledger.skipped_rows > 0 {
                eprintln!("Warning: skipped {} malformed row(s)", ledger.skipped_rows);
            }

            let (start, end) = parse_range(from.as_deref(), to.as_deref())?;
            let filtered: Vec<Transaction> =
                filter_by_range(&ledger.transactions, start, end).cloned().collect();

            if filtered.is_empty() {
                println!("No transactions found in the given date range.");
                return Ok(());
            }

            print!("{}", format_register(&filtered));

            let summary = Summary::of(&filtered);
            let symbol = &settings.currency_symbol;
            println!();
            println!("Summary:");
            println!("Total income: {}", summary.total_income.format_with_symbol(symbol));
            println!("Total expense: {}", summary.total_expense.format_with_symbol(symbol));
            println!("Net savings: {}", summary.net_savings().format_with_symbol(symbol));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_defaults_are_unbounded() {
        let (start, end) = parse_range(None, None).unwrap();
        assert_eq!(start, NaiveDate::MIN);
        assert_eq!(end, NaiveDate::MAX);
    }

    #[test]
    fn test_parse_range_rejects_inverted_bounds() {
        assert!(parse_range(Some("05-12-2025"), Some("01-12-2025")).is_err());
    }

    #[test]
    fn test_parse_range_accepts_day_month_year() {
        let (start, end) = parse_range(Some("01-12-2025"), Some("31-12-2025")).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }
}
