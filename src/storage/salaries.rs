//! Salary sidecar file
//!
//! Monthly salaries are kept in `<stem>.salaries.json` beside the CSV file so
//! the CSV itself stays a plain two-column export.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LedgerError;
use crate::ledger::SalaryMap;

use super::file_io::{read_json, write_json_atomic};

/// Persists the salary map for one CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryFile {
    path: PathBuf,
}

impl SalaryFile {
    /// Use an explicit sidecar path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Sidecar for a CSV file: `expenses.csv` -> `expenses.salaries.json`
    pub fn beside(csv_path: &Path) -> Self {
        let stem = csv_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "expenses".to_string());
        Self::new(csv_path.with_file_name(format!("{}.salaries.json", stem)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load salaries; a missing sidecar means none were declared yet
    pub fn load(&self) -> Result<SalaryMap, LedgerError> {
        let salaries: SalaryMap = read_json(&self.path)?;
        debug!(path = %self.path.display(), count = salaries.len(), "Loaded salaries");
        Ok(salaries)
    }

    /// Save salaries atomically
    pub fn save(&self, salaries: &SalaryMap) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, salaries)?;
        debug!(path = %self.path.display(), count = salaries.len(), "Saved salaries");
        Ok(())
    }
}
