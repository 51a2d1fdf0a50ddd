//! Spreadsheet export
//!
//! Writes every expense record to a single `Expenses` worksheet with a
//! `date` / `amount` header row. One-way: nothing reads these files back.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, DATE_FORMAT};

/// Worksheet name used for every export
pub const SHEET_NAME: &str = "Expenses";

/// Output file name when none is given
pub const DEFAULT_FILE_NAME: &str = "expenses_report.xlsx";

// Last row index Excel can address
const MAX_ROW: u32 = 1_048_575;

/// Build the workbook for a set of records
pub fn build_workbook(records: &[Expense]) -> LedgerResult<Workbook> {
    let last_row = u32::try_from(records.len())
        .ok()
        .filter(|rows| *rows <= MAX_ROW)
        .ok_or_else(|| {
            LedgerError::Export(format!(
                "{} records do not fit in one worksheet",
                records.len()
            ))
        })?;

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    worksheet.write_string_with_format(0, 0, "date", &bold)?;
    worksheet.write_string_with_format(0, 1, "amount", &bold)?;

    for (row, expense) in (1..=last_row).zip(records) {
        worksheet.write_string(row, 0, expense.date.format(DATE_FORMAT).to_string())?;
        worksheet.write_number(row, 1, expense.amount.to_f64())?;
    }

    worksheet.set_column_width(0, 12)?;
    Ok(workbook)
}

/// Write records to an `.xlsx` file
pub fn export_xlsx(records: &[Expense], path: &Path) -> LedgerResult<()> {
    let mut workbook = build_workbook(records)?;
    workbook.save(path)?;
    info!(path = %path.display(), rows = records.len(), "Exported spreadsheet");
    Ok(())
}
