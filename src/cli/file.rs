//! File CLI commands
//!
//! Creating, opening and inspecting the CSV file bound to the session.

use std::path::{Path, PathBuf};

use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::display::format_ledger;
use crate::error::{LedgerError, LedgerResult};
use crate::session::Session;
use crate::sync::{CliPicker, FileHandle, FilePicker};

use super::load_session;

/// Create a new CSV file and bind it
pub fn handle_new_command(
    paths: &LedgerPaths,
    settings: &mut Settings,
    path: Option<PathBuf>,
    yes: bool,
) -> LedgerResult<()> {
    let file = CliPicker::new(path).assume_yes(yes).create_new()?;
    let bound = bound_path(&file)?;

    let mut session = Session::new();
    session.create_file(Box::new(file))?;

    settings.bind_file(&bound);
    settings.save(paths)?;

    println!("Created: {}", bound.display());
    println!("Record expenses with 'expenses add <DATE> <AMOUNT>'.");
    Ok(())
}

/// Open an existing CSV file, bind it and print its contents
pub fn handle_open_command(
    paths: &LedgerPaths,
    settings: &mut Settings,
    path: Option<PathBuf>,
) -> LedgerResult<()> {
    let file = CliPicker::new(path).open_existing()?;
    let bound = bound_path(&file)?;

    let session = Session::open(Box::new(file))?;

    settings.bind_file(&bound);
    settings.save(paths)?;

    let ledger = session.ledger();
    println!(
        "Opened: {} ({} expenses in {} months)",
        bound.display(),
        ledger.len(),
        ledger.months().len()
    );
    println!();
    println!(
        "{}",
        format_ledger(ledger, session.salaries(), &settings.currency_symbol, None)
    );
    Ok(())
}

/// Show configuration paths and the bound file, or `file` when given
pub fn handle_status_command(
    paths: &LedgerPaths,
    settings: &Settings,
    file: Option<&Path>,
) -> LedgerResult<()> {
    println!("Expense Ledger Status");
    println!("=====================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Currency symbol:  {:?}", settings.currency_symbol);
    println!();

    let Some(current) = file.or(settings.current_file.as_deref()) else {
        println!("Bound file:       none");
        println!();
        println!("Run 'expenses new' or 'expenses open <FILE>' to bind a CSV file.");
        return Ok(());
    };

    println!("Bound file:       {}", current.display());

    let session = load_session(settings, file)?;
    let ledger = session.ledger();
    println!("Expenses:         {}", ledger.len());
    println!("Months:           {}", ledger.months().len());
    println!("Salaries set:     {}", session.salaries().len());
    if let Some((first, last)) = ledger.date_range() {
        println!("Date range:       {} to {}", first, last);
    }
    println!(
        "Total spent:      {}",
        ledger.total().format_with_symbol(&settings.currency_symbol)
    );

    Ok(())
}

fn bound_path(file: &dyn FileHandle) -> LedgerResult<PathBuf> {
    file.path()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| LedgerError::Storage(format!("{} has no path", file.describe())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_status_reads_file_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("config"));
        let settings = Settings::default();

        let csv = temp_dir.path().join("other.csv");
        fs::write(&csv, "Date,Amount\n2024-01-05,100").unwrap();
        handle_status_command(&paths, &settings, Some(&csv)).unwrap();

        let missing = temp_dir.path().join("missing.csv");
        assert!(handle_status_command(&paths, &settings, Some(&missing)).is_err());
        assert!(handle_status_command(&paths, &settings, None).is_ok());
    }
}
