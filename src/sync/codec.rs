//! CSV encoding of the ledger
//!
//! The file is a header line `Date,Amount` followed by one `date,amount` line
//! per record. Dates are ISO and amounts are plain decimals, so no field can
//! contain a comma and the writer never quotes. The reader goes through the
//! `csv` crate, so quoted fields written by other tools still load.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Expense, Money, DATE_FORMAT};

/// Header line of every ledger file
pub const HEADER: &str = "Date,Amount";

/// Render records as CSV text
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn serialize(records: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(
        records
            .iter()
            .map(|e| format!("{},{}", e.date.format(DATE_FORMAT), e.amount)),
    );
    lines.join("\n")
}

/// Parse CSV text into records, in file order
///
/// Blank lines are skipped. Any row that is not exactly a date and a
/// non-negative amount fails the whole parse.
pub fn parse(text: &str) -> LedgerResult<Vec<Expense>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if is_blank(&headers) {
        debug!("Empty ledger file");
        return Ok(Vec::new());
    }
    check_header(&headers)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        if is_blank(&record) {
            continue;
        }
        records.push(parse_record(&record, line)?);
    }

    debug!(count = records.len(), "Parsed ledger CSV");
    Ok(records)
}

fn parse_record(record: &StringRecord, line: u64) -> LedgerResult<Expense> {
    if record.len() != 2 {
        return Err(LedgerError::malformed_row(
            line,
            format!("expected 2 fields (date, amount), found {}", record.len()),
        ));
    }

    let date = parse_date(&record[0]).map_err(|e| LedgerError::malformed_row(line, e.to_string()))?;

    let amount = Money::parse_plain(&record[1])
        .map_err(|e| LedgerError::malformed_row(line, e.to_string()))?;

    Expense::new(date, amount).map_err(|e| LedgerError::malformed_row(line, e.to_string()))
}

fn check_header(headers: &StringRecord) -> LedgerResult<()> {
    let matches = headers.len() == 2
        && headers[0].eq_ignore_ascii_case("date")
        && headers[1].eq_ignore_ascii_case("amount");

    if !matches {
        let found = headers.iter().collect::<Vec<_>>().join(",");
        warn!(%found, "Unexpected ledger header");
        return Err(LedgerError::malformed_row(
            1,
            format!("expected header '{}', found '{}'", HEADER, found),
        ));
    }
    Ok(())
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}
