//! Storage layer for the expense ledger
//!
//! Provides atomic text and JSON writes plus the salary sidecar file.

pub mod file_io;
pub mod salaries;

pub use file_io::{read_json, write_json_atomic, write_text_atomic};
pub use salaries::SalaryFile;
