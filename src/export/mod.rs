//! Export module for the expense ledger
//!
//! Provides data export in two formats:
//! - XLSX: spreadsheet with one `Expenses` sheet of date/amount rows
//! - JSON: machine-readable snapshot of expenses and salaries

pub mod json;
pub mod xlsx;

pub use json::{export_json, read_json_export, FullExport, EXPORT_SCHEMA_VERSION};
pub use xlsx::{build_workbook, export_xlsx, DEFAULT_FILE_NAME, SHEET_NAME};
