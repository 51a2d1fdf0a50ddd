//! File picker for the command line
//!
//! Stands in for the browser's save/open dialogs: the path comes from the
//! command line, or the user is prompted for it. Dismissing the prompt maps to
//! [`LedgerError::UserCancelled`].

use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

use super::handle::LocalFile;

/// Name suggested when creating a new ledger file
pub const SUGGESTED_FILE_NAME: &str = "expenses.csv";

/// Provides file handles for new and existing ledger files
pub trait FilePicker {
    /// A handle for a new (or overwritten) file
    fn create_new(&self) -> LedgerResult<LocalFile>;

    /// A handle for an existing file
    fn open_existing(&self) -> LedgerResult<LocalFile>;
}

/// Picks files from a command-line argument, prompting when it is absent
#[derive(Debug, Clone, Default)]
pub struct CliPicker {
    path: Option<PathBuf>,
    assume_yes: bool,
}

impl CliPicker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            assume_yes: false,
        }
    }

    /// Skip the overwrite confirmation
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    fn chosen_path(&self, prompt: &str, default: Option<&str>) -> LedgerResult<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }

        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        let answer = input
            .interact_text()
            .map_err(|e| LedgerError::Io(format!("Failed to read file name: {}", e)))?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(LedgerError::cancelled("no file chosen"));
        }
        Ok(PathBuf::from(answer))
    }

    fn confirm_overwrite(&self, path: &Path) -> LedgerResult<()> {
        if self.assume_yes || !path.exists() {
            return Ok(());
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact_opt()
            .map_err(|e| LedgerError::Io(format!("Failed to read confirmation: {}", e)))?;

        match confirmed {
            Some(true) => Ok(()),
            _ => Err(LedgerError::cancelled("file creation")),
        }
    }
}

impl FilePicker for CliPicker {
    fn create_new(&self) -> LedgerResult<LocalFile> {
        let path = self.chosen_path("New CSV file", Some(SUGGESTED_FILE_NAME))?;
        let path = ensure_csv_extension(path)?;
        self.confirm_overwrite(&path)?;
        debug!(path = %path.display(), "Picked new ledger file");
        Ok(LocalFile::create(path))
    }

    fn open_existing(&self) -> LedgerResult<LocalFile> {
        let path = self.chosen_path("CSV file to open", None)?;
        if !has_csv_extension(&path) {
            return Err(LedgerError::Validation(format!(
                "Only .csv files can be opened: {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), "Picked existing ledger file");
        LocalFile::open(path)
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Add `.csv` to a bare name; any other extension is refused
fn ensure_csv_extension(path: PathBuf) -> LedgerResult<PathBuf> {
    match path.extension() {
        None => Ok(path.with_extension("csv")),
        Some(_) if has_csv_extension(&path) => Ok(path),
        Some(_) => Err(LedgerError::Validation(format!(
            "Ledger files must end in .csv: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::FileHandle;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_new_from_argument() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger");

        let handle = CliPicker::new(Some(path.clone())).create_new().unwrap();
        assert_eq!(handle.path(), Some(path.with_extension("csv").as_path()));
    }

    #[test]
    fn test_create_new_overwrite_with_assume_yes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, "Date,Amount").unwrap();

        let handle = CliPicker::new(Some(path.clone()))
            .assume_yes(true)
            .create_new()
            .unwrap();
        assert_eq!(handle.path(), Some(path.as_path()));
    }

    #[test]
    fn test_create_new_refuses_other_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");

        let err = CliPicker::new(Some(path.clone())).create_new().unwrap_err();
        assert!(err.is_validation());
        assert!(!path.exists());
    }

    #[test]
    fn test_created_file_can_be_reopened() {
        let temp_dir = TempDir::new().unwrap();
        let handle = CliPicker::new(Some(temp_dir.path().join("ledger")))
            .create_new()
            .unwrap();
        handle.write_all("Date,Amount").unwrap();

        let path = handle.path().unwrap().to_path_buf();
        let reopened = CliPicker::new(Some(path)).open_existing().unwrap();
        assert_eq!(reopened.read_all().unwrap(), "Date,Amount");
    }

    #[test]
    fn test_open_existing_requires_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let err = CliPicker::new(Some(path)).open_existing().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_open_existing_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = CliPicker::new(Some(temp_dir.path().join("missing.csv")))
            .open_existing()
            .unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }

    #[test]
    fn test_csv_extension_is_case_insensitive() {
        assert!(has_csv_extension(Path::new("EXPENSES.CSV")));
        assert!(!has_csv_extension(Path::new("expenses")));
    }
}
