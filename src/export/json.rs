//! JSON Export functionality
//!
//! Exports the ledger and declared salaries to JSON with schema versioning.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{LedgerStore, SalaryMap};
use crate::models::Expense;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expense records, ascending by date
    pub expenses: Vec<Expense>,

    /// Declared monthly salaries
    pub salaries: SalaryMap,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expense records
    pub expense_count: usize,

    /// Number of months with at least one expense
    pub month_count: usize,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Snapshot the ledger and salaries
    pub fn new(ledger: &LedgerStore, salaries: &SalaryMap) -> Self {
        let range = ledger.date_range();

        let metadata = ExportMetadata {
            expense_count: ledger.len(),
            month_count: ledger.months().len(),
            earliest_expense: range.map(|(first, _)| first.to_string()),
            latest_expense: range.map(|(_, last)| last.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: ledger.records().to_vec(),
            salaries: salaries.clone(),
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses but {} are present",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        if let Some(expense) = self.expenses.iter().find(|e| e.validate().is_err()) {
            return Err(format!(
                "Expense on {} has a negative amount",
                expense.date
            ));
        }

        Ok(())
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(
    ledger: &LedgerStore,
    salaries: &SalaryMap,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::new(ledger, salaries);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn read_json_export(json_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| LedgerError::Export(e.to_string()))?;

    export.validate().map_err(LedgerError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthKey};

    fn sample() -> (LedgerStore, SalaryMap) {
        let ledger = LedgerStore::from_records(vec![
            Expense::parse("2024-02-01", "30").unwrap(),
            Expense::parse("2024-01-05", "100").unwrap(),
        ]);
        let mut salaries = SalaryMap::new();
        salaries
            .set(MonthKey::parse("2024-01").unwrap(), Money::from_units(5000))
            .unwrap();
        (ledger, salaries)
    }

    #[test]
    fn test_full_export() {
        let (ledger, salaries) = sample();
        let export = FullExport::new(&ledger, &salaries);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.month_count, 2);
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2024-01-05"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2024-02-01"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let (ledger, salaries) = sample();

        let mut output = Vec::new();
        export_json(&ledger, &salaries, &mut output, true).unwrap();
        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("\"2024-01\""));

        let imported = read_json_export(&json).unwrap();
        assert_eq!(imported.expenses, ledger.records());
        assert_eq!(imported.salaries, salaries);
    }

    #[test]
    fn test_empty_export() {
        let export = FullExport::new(&LedgerStore::new(), &SalaryMap::new());
        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest_expense.is_none());
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let (ledger, salaries) = sample();
        let mut export = FullExport::new(&ledger, &salaries);
        export.schema_version = "0.1.0".to_string();

        let json = serde_json::to_string(&export).unwrap();
        assert!(matches!(read_json_export(&json), Err(LedgerError::Export(_))));
    }
}
