//! CLI commands for reports
//!
//! Text renditions of the summary, monthly, and breakdown views; the same
//! aggregates drive the TUI charts.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{
    double_separator, format_bar, format_money_colored, format_percentage, separator, truncate,
};
use crate::error::PennyResult;
use crate::models::{format_date, Category, Transaction};
use crate::reports::{breakdown_by_description, filter_by_range, group_by_month, Summary};
use crate::storage::LedgerStore;

const BAR_WIDTH: usize = 30;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expense, and net savings totals for a date range
    Summary {
        /// Start date (dd-mm-yyyy)
        #[arg(long)]
        from: Option<String>,
        /// End date (dd-mm-yyyy)
        #[arg(long)]
        to: Option<String>,
    },
    /// Per-month income vs expense with proportional bars
    Monthly {
        /// Start date (dd-mm-yyyy)
        #[arg(long)]
        from: Option<String>,
        /// End date (dd-mm-yyyy)
        #[arg(long)]
        to: Option<String>,
    },
    /// Totals per description within one category
    Breakdown {
        /// Category to break down (default: expense)
        #[arg(short, long, default_value = "expense")]
        category: String,
        /// Start date (dd-mm-yyyy)
        #[arg(long)]
        from: Option<String>,
        /// End date (dd-mm-yyyy)
        #[arg(long)]
        to: Option<String>,
        /// Show only the top N descriptions
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> PennyResult<()> {
    let ledger = store.load()?;
    if ledger.skipped_rows > 0 {
        eprintln!("Warning: skipped {} malformed row(s)", ledger.skipped_rows);
    }

    match cmd {
        ReportCommands::Summary { from, to } => {
            let filtered = collect_range(&ledger.transactions, from.as_deref(), to.as_deref())?;
            if empty_notice(&filtered) {
                return Ok(());
            }
            print_summary(&filtered, settings);
            Ok(())
        }
        ReportCommands::Monthly { from, to } => {
            let filtered = collect_range(&ledger.transactions, from.as_deref(), to.as_deref())?;
            if empty_notice(&filtered) {
                return Ok(());
            }
            print_monthly(&filtered, settings);
            Ok(())
        }
        ReportCommands::Breakdown {
            category,
            from,
            to,
            top,
        } => {
            let category: Category = category.parse()?;
            let filtered = collect_range(&ledger.transactions, from.as_deref(), to.as_deref())?;
            if empty_notice(&filtered) {
                return Ok(());
            }
            print_breakdown(&filtered, category, top, settings);
            Ok(())
        }
    }
}

fn collect_range(
    transactions: &[Transaction],
    from: Option<&str>,
    to: Option<&str>,
) -> PennyResult<Vec<Transaction>> {
    let (start, end) = super::transaction::parse_range(from, to)?;
    Ok(filter_by_range(transactions, start, end).cloned().collect())
}

fn empty_notice(transactions: &[Transaction]) -> bool {
    if transactions.is_empty() {
        println!("No transactions found in the given date range.");
        true
    } else {
        false
    }
}

fn print_summary(transactions: &[Transaction], settings: &Settings) {
    let summary = Summary::of(transactions);
    let symbol = &settings.currency_symbol;

    let first = transactions.iter().map(|t| t.date).min();
    let last = transactions.iter().map(|t| t.date).max();

    println!("{}", double_separator(50));
    println!("FINANCIAL SUMMARY");
    println!("{}", double_separator(50));
    if let (Some(first), Some(last)) = (first, last) {
        println!("Date range: {} to {}", format_date(first), format_date(last));
    }
    println!("Transactions: {}", transactions.len());
    println!("{}", separator(50));
    println!(
        "Total income:  {:>14}",
        summary.total_income.format_with_symbol(symbol)
    );
    println!(
        "Total expense: {:>14}",
        summary.total_expense.format_with_symbol(symbol)
    );
    println!("{}", separator(50));
    let net = summary.net_savings();
    let label = if net.is_negative() { "Net loss:    " } else { "Net savings: " };
    println!("{} {:>14}", label, format_money_colored(net));
    println!("{}", double_separator(50));
}

fn print_monthly(transactions: &[Transaction], settings: &Settings) {
    let months = group_by_month(transactions);
    let symbol = &settings.currency_symbol;

    let max = months
        .values()
        .flat_map(|m| [m.income, m.expense])
        .max()
        .unwrap_or_default()
        .to_f64();

    println!("Monthly income vs expense");
    println!("{}", separator(70));
    for (month, totals) in &months {
        println!(
            "{}  in  {} {:>12}",
            month,
            format_bar(totals.income.to_f64(), max, BAR_WIDTH),
            totals.income.format_with_symbol(symbol)
        );
        println!(
            "{}  out {} {:>12}",
            month,
            format_bar(totals.expense.to_f64(), max, BAR_WIDTH),
            totals.expense.format_with_symbol(symbol)
        );
    }
    println!("{}", separator(70));
}

fn print_breakdown(
    transactions: &[Transaction],
    category: Category,
    top: Option<usize>,
    settings: &Settings,
) {
    let mut entries = breakdown_by_description(transactions, category);
    if entries.is_empty() {
        println!("No {} data in the given date range.", category.to_string().to_lowercase());
        return;
    }
    if let Some(top) = top {
        entries.truncate(top);
    }

    let total: f64 = entries.iter().map(|(_, m)| m.to_f64()).sum();
    let max = entries
        .iter()
        .map(|(_, m)| m.to_f64())
        .fold(0.0_f64, f64::max);
    let symbol = &settings.currency_symbol;

    println!("{} breakdown by description", category);
    println!("{}", separator(76));
    for (desc, amount) in &entries {
        let pct = if total > 0.0 {
            amount.to_f64() / total * 100.0
        } else {
            0.0
        };
        println!(
            "{:<24} {} {:>12} {:>7}",
            truncate(desc, 24),
            format_bar(amount.to_f64(), max, BAR_WIDTH),
            amount.format_with_symbol(symbol),
            format_percentage(pct)
        );
    }
    println!("{}", separator(76));
}
