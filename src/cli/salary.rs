//! Salary CLI commands
//!
//! Declares the monthly salary the running balance is measured against.

use std::path::Path;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::LedgerResult;

use super::expense::parse_month;
use super::load_session;

/// Salary subcommands
#[derive(Subcommand, Debug)]
pub enum SalaryCommands {
    /// Set the salary for a month (once per month)
    Set {
        /// Month (e.g., "2024-01" for January 2024)
        month: String,
        /// Salary amount (e.g., "50000" or "50000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show declared salaries
    Show,
}

/// Handle a salary command
pub fn handle_salary_command(
    settings: &Settings,
    file: Option<&Path>,
    cmd: SalaryCommands,
) -> LedgerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        SalaryCommands::Set { month, amount } => {
            let month = parse_month(&month)?;
            let mut session = load_session(settings, file)?;
            let salary = session.set_salary(month, &amount)?;

            let spent = session.ledger().monthly_total(&month);
            println!(
                "Salary for {} set to {}",
                month.friendly(),
                salary.format_with_symbol(symbol)
            );
            println!("Remaining:  {}", (salary - spent).format_with_symbol(symbol));
        }

        SalaryCommands::Show => {
            let session = load_session(settings, file)?;
            let salaries = session.salaries();

            if salaries.is_empty() {
                println!("No salaries set.");
                println!("Use 'expenses salary set <MONTH> <AMOUNT>' to declare one.");
                return Ok(());
            }

            println!("{:<16}  {:>14}", "Month", "Salary");
            println!("{}", "-".repeat(32));
            for (month, salary) in salaries.iter() {
                println!(
                    "{:<16}  {:>14}",
                    month.friendly(),
                    salary.format_with_symbol(symbol)
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::{Money, MonthKey};
    use crate::storage::SalaryFile;
    use std::fs;
    use tempfile::TempDir;

    fn set(month: &str, amount: &str) -> SalaryCommands {
        SalaryCommands::Set {
            month: month.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_set_persists_sidecar() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, "Date,Amount").unwrap();
        let mut settings = Settings::default();
        settings.bind_file(&path);

        handle_salary_command(&settings, None, set("2024-01", "50000")).unwrap();

        let salaries = SalaryFile::beside(&path).load().unwrap();
        assert_eq!(
            salaries.get(&MonthKey::parse("2024-01").unwrap()),
            Some(Money::from_units(50000))
        );
    }

    #[test]
    fn test_set_twice_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, "Date,Amount").unwrap();
        let mut settings = Settings::default();
        settings.bind_file(&path);

        handle_salary_command(&settings, None, set("2024-01", "50000")).unwrap();
        let err = handle_salary_command(&settings, None, set("2024-01", "1")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_set_without_file_fails() {
        let err = handle_salary_command(&Settings::default(), None, set("2024-01", "10"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::NoFileSelected));
    }
}
