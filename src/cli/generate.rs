//! Sample data generation command

use crate::config::Settings;
use crate::error::{PennyError, PennyResult};
use crate::generator;
use crate::storage::LedgerStore;

/// Generate a sample ledger covering the last `months` months
///
/// Refuses to touch a ledger that already has entries unless `force` is set,
/// in which case the existing file is replaced.
pub fn handle_generate(
    store: &LedgerStore,
    settings: &Settings,
    months: Option<u32>,
    force: bool,
) -> PennyResult<()> {
    let months = months.unwrap_or(settings.default_generate_months);
    if months == 0 {
        return Err(PennyError::Validation(
            "Months must be at least 1".into(),
        ));
    }

    let existing = store.load()?;
    if !existing.is_empty() {
        if !force {
            return Err(PennyError::Validation(format!(
                "Ledger at {} already has {} transaction(s); pass --force to replace it",
                store.path().display(),
                existing.len()
            )));
        }
        std::fs::remove_file(store.path())
            .map_err(|e| PennyError::Storage(format!("Failed to remove old ledger: {}", e)))?;
    }

    store.initialize()?;

    let today = chrono::Local::now().date_naive();
    let transactions = generator::generate(months, today);
    for txn in &transactions {
        store.append(txn)?;
    }

    println!(
        "Generated {} transactions over {} months",
        transactions.len(),
        months
    );
    println!("Saved to: {}", store.path().display());
    Ok(())
}
