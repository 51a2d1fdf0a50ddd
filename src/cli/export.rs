//! CLI command for data export
//!
//! Writes the ledger to a spreadsheet or a JSON snapshot.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_json, export_xlsx};

use super::load_session;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet with one `Expenses` sheet
    #[default]
    Xlsx,
    /// Full snapshot of expenses and salaries
    Json,
}

/// Handle the export command
pub fn handle_export_command(
    settings: &Settings,
    file: Option<&Path>,
    output: Option<PathBuf>,
    format: ExportFormat,
    pretty: bool,
) -> LedgerResult<()> {
    let session = load_session(settings, file)?;
    let records = session.ledger().records();
    let output = output.unwrap_or_else(|| default_output(settings, format));

    match format {
        ExportFormat::Xlsx => {
            export_xlsx(records, &output)?;
        }
        ExportFormat::Json => {
            let file = File::create(&output).map_err(|e| {
                LedgerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_json(session.ledger(), session.salaries(), &mut writer, pretty)?;
        }
    }

    println!("Exported {} expenses to: {}", records.len(), output.display());
    Ok(())
}

fn default_output(settings: &Settings, format: ExportFormat) -> PathBuf {
    let name = PathBuf::from(&settings.export_file_name);
    match format {
        ExportFormat::Xlsx => name,
        ExportFormat::Json => name.with_extension("json"),
    }
}
