//! TUI application state
//!
//! Holds the filtered transactions and every chart series derived from them.
//! All aggregation happens once at startup; rendering only reads.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Money, Transaction};
use crate::reports::{
    breakdown_by_description, cumulative_savings, group_by_month, MonthTotals, Summary, YearMonth,
};

/// Chart screens, cycled with Tab / BackTab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    IncomeExpense,
    OverTime,
    Savings,
    Breakdown,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::IncomeExpense,
        Screen::OverTime,
        Screen::Savings,
        Screen::Breakdown,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::IncomeExpense => "Income vs Expense",
            Screen::OverTime => "Over Time",
            Screen::Savings => "Cumulative Savings",
            Screen::Breakdown => "Expense Breakdown",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application state for the chart TUI
pub struct App {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub months: Vec<(YearMonth, MonthTotals)>,
    pub savings: Vec<(NaiveDate, Money)>,
    pub breakdown: Vec<(String, Money)>,
    /// Per-day income totals, chronological
    pub daily_income: Vec<(NaiveDate, Money)>,
    /// Per-day expense totals, chronological
    pub daily_expense: Vec<(NaiveDate, Money)>,
    pub current_screen: Screen,
    pub should_quit: bool,
}

impl App {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let summary = Summary::of(&transactions);
        let months = group_by_month(&transactions).into_iter().collect();
        let savings = cumulative_savings(&transactions);
        let breakdown = breakdown_by_description(&transactions, Category::Expense);
        let daily_income = daily_totals(&transactions, Category::Income);
        let daily_expense = daily_totals(&transactions, Category::Expense);

        Self {
            transactions,
            summary,
            months,
            savings,
            breakdown,
            daily_income,
            daily_expense,
            current_screen: Screen::Dashboard,
            should_quit: false,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.transactions.is_empty()
    }

    pub fn next_screen(&mut self) {
        self.current_screen = self.current_screen.next();
    }

    pub fn prev_screen(&mut self) {
        self.current_screen = self.current_screen.prev();
    }
}

/// Total amount per day for one category, chronological
fn daily_totals(transactions: &[Transaction], category: Category) -> Vec<(NaiveDate, Money)> {
    let mut days: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for txn in transactions {
        if txn.category == category {
            *days.entry(txn.date).or_default() += txn.amount;
        }
    }
    days.into_iter().collect()
}
