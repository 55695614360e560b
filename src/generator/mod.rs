//! Synthetic sample data generator
//!
//! Produces a realistic-looking ledger for demos: salary on the 1st of each
//! month, fixed bills on fixed days, and random daily expenses.

use chrono::{Datelike, Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Category, Money, Transaction};

/// (description, min cents, max cents)
type AmountRange = (&'static str, i64, i64);

const EXTRA_INCOME_SOURCES: &[AmountRange] = &[
    ("Freelance Project", 50_000, 200_000),
    ("YouTube Revenue", 5_000, 30_000),
    ("Consulting", 20_000, 80_000),
    ("Dividends", 5_000, 20_000),
    ("Side Gig", 10_000, 50_000),
];

/// Bills recorded on a fixed day of every month
const MONTHLY_BILLS: &[(u32, AmountRange)] = &[
    (1, ("Rent", 120_000, 180_000)),
    (5, ("Electric Bill", 8_000, 15_000)),
    (10, ("Internet", 6_000, 10_000)),
    (15, ("Car Insurance", 10_000, 20_000)),
];

const DAILY_EXPENSES: &[AmountRange] = &[
    ("Groceries", 8_000, 20_000),
    ("Gas", 4_000, 8_000),
    ("Phone Bill", 5_000, 9_000),
    ("Dining Out", 2_000, 8_000),
    ("Coffee", 500, 1_500),
    ("Gym Membership", 3_000, 5_000),
    ("Streaming Services", 1_500, 4_500),
    ("Health Insurance", 20_000, 40_000),
    ("Amazon Purchase", 2_000, 15_000),
    ("Uber/Lyft", 1_500, 5_000),
    ("Clothing", 3_000, 15_000),
    ("Home Supplies", 2_000, 8_000),
    ("Haircut", 2_500, 5_000),
    ("Pet Supplies", 3_000, 8_000),
    ("Entertainment", 2_000, 10_000),
    ("Software Subscription", 1_000, 5_000),
    ("Books/Courses", 2_000, 10_000),
];

/// Generate sample transactions for the `months` leading up to `today`
pub fn generate(months: u32, today: NaiveDate) -> Vec<Transaction> {
    generate_with_rng(months, today, &mut rand::thread_rng())
}

/// Deterministic variant for tests: takes the random source explicitly
pub fn generate_with_rng<R: Rng>(months: u32, today: NaiveDate, rng: &mut R) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let start = today - Duration::days(i64::from(months) * 30);

    let mut current = start;
    while current <= today {
        if current.day() == 1 {
            // Primary salary
            transactions.push(income(current, rng.gen_range(450_000..=550_000), "Salary"));

            // Occasional extra income
            if rng.gen_bool(0.5) {
                if let Some(source) = EXTRA_INCOME_SOURCES.choose(rng) {
                    transactions
                        .push(income(current, rng.gen_range(source.1..=source.2), source.0));
                }
            }
        }

        for (day, bill) in MONTHLY_BILLS {
            if current.day() == *day {
                transactions.push(expense(current, rng.gen_range(bill.1..=bill.2), bill.0));
            }
        }

        // Random daily expenses, most days
        if rng.gen_bool(0.7) {
            let count = rng.gen_range(1..=3);
            let picks: Vec<&AmountRange> =
                DAILY_EXPENSES.choose_multiple(rng, count).collect();
            for pick in picks {
                transactions.push(expense(current, rng.gen_range(pick.1..=pick.2), pick.0));
            }
        }

        current = current + Duration::days(1);
    }

    transactions
}

fn income(date: NaiveDate, cents: i64, description: &str) -> Transaction {
    Transaction::new(date, Money::from_cents(cents), Category::Income, description)
}

fn expense(date: NaiveDate, cents: i64, description: &str) -> Transaction {
    Transaction::new(date, Money::from_cents(cents), Category::Expense, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }

    #[test]
    fn test_all_generated_transactions_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let txns = generate_with_rng(3, today(), &mut rng);

        assert!(!txns.is_empty());
        for txn in &txns {
            assert!(txn.validate().is_ok());
        }
    }

    #[test]
    fn test_dates_stay_within_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let txns = generate_with_rng(2, today(), &mut rng);

        let start = today() - Duration::days(60);
        for txn in &txns {
            assert!(txn.date >= start && txn.date <= today());
        }
    }

    #[test]
    fn test_salary_on_first_of_month() {
        let mut rng = StdRng::seed_from_u64(7);
        let txns = generate_with_rng(3, today(), &mut rng);

        let salaries: Vec<_> = txns
            .iter()
            .filter(|t| t.description == "Salary")
            .collect();
        assert!(!salaries.is_empty());
        for salary in salaries {
            assert_eq!(salary.date.day(), 1);
            assert_eq!(salary.category, Category::Income);
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = generate_with_rng(2, today(), &mut StdRng::seed_from_u64(42));
        let b = generate_with_rng(2, today(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
