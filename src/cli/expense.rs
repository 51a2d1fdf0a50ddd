//! Expense CLI commands
//!
//! Recording expenses and viewing them grouped by month.

use std::path::Path;

use chrono::Local;

use crate::config::settings::Settings;
use crate::display::{format_ledger, format_month_summaries, month_views};
use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthKey;

use super::load_session;

/// Record one expense in the bound file
pub fn handle_add_command(
    settings: &Settings,
    file: Option<&Path>,
    date: &str,
    amount: &str,
) -> LedgerResult<()> {
    let mut session = load_session(settings, file)?;
    let today = Local::now().date_naive();

    let expense = session.add_expense(date, amount, today)?;
    let month = expense.month();

    println!(
        "Recorded {} on {}",
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.date
    );
    println!(
        "{} total: {}",
        month.friendly(),
        session
            .ledger()
            .monthly_total(&month)
            .format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Print the month tables, optionally for a single month
pub fn handle_show_command(
    settings: &Settings,
    file: Option<&Path>,
    month: Option<&str>,
) -> LedgerResult<()> {
    let only = month.map(parse_month).transpose()?;
    let session = load_session(settings, file)?;

    println!(
        "{}",
        format_ledger(
            session.ledger(),
            session.salaries(),
            &settings.currency_symbol,
            only
        )
    );
    Ok(())
}

/// Print one summary line per month
pub fn handle_summary_command(settings: &Settings, file: Option<&Path>) -> LedgerResult<()> {
    let session = load_session(settings, file)?;
    let views = month_views(session.ledger(), session.salaries());

    print!(
        "{}",
        format_month_summaries(&views, &settings.currency_symbol)
    );
    Ok(())
}

pub(crate) fn parse_month(s: &str) -> LedgerResult<MonthKey> {
    MonthKey::parse(s).map_err(|e| LedgerError::Validation(format!("Invalid month '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn bound_settings(temp_dir: &TempDir, contents: &str) -> (Settings, std::path::PathBuf) {
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, contents).unwrap();
        let mut settings = Settings::default();
        settings.bind_file(&path);
        (settings, path)
    }

    #[test]
    fn test_add_writes_bound_file() {
        let temp_dir = TempDir::new().unwrap();
        let (settings, path) = bound_settings(&temp_dir, "Date,Amount");

        handle_add_command(&settings, None, "2024-01-20", "50").unwrap();
        handle_add_command(&settings, None, "2024-01-05", "100").unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Date,Amount\n2024-01-05,100\n2024-01-20,50"
        );
    }

    #[test]
    fn test_add_without_file_fails() {
        let err = handle_add_command(&Settings::default(), None, "2024-01-05", "10").unwrap_err();
        assert!(matches!(err, LedgerError::NoFileSelected));
    }

    #[test]
    fn test_add_invalid_date_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let (settings, path) = bound_settings(&temp_dir, "Date,Amount\n2024-01-05,100");

        let err = handle_add_command(&settings, None, "not-a-date", "10").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Date,Amount\n2024-01-05,100"
        );
    }

    #[test]
    fn test_show_rejects_bad_month() {
        let err = handle_show_command(&Settings::default(), None, Some("2024-13")).unwrap_err();
        assert!(err.is_validation());
    }
}
