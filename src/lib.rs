//! Expense Ledger - month-grouped personal expenses in a plain CSV file
//!
//! This library provides the core of the `expenses` command-line tool. The
//! user binds a CSV file, records dated expenses in it, and views them grouped
//! by month with a running balance against a declared monthly salary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core value types (money, months, expense records)
//! - `ledger`: The sorted ledger store and the salary map
//! - `sync`: CSV codec, file handles and the file picker
//! - `storage`: Atomic file writes and the salary sidecar
//! - `session`: Command state tying the ledger to its bound file
//! - `display`: Terminal rendering of month tables and summaries
//! - `export`: Spreadsheet and JSON export
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::session::Session;
//! use expense_ledger::sync::LocalFile;
//!
//! let mut session = Session::open(Box::new(LocalFile::open("expenses.csv")?))?;
//! session.add_expense("2024-01-05", "100", chrono::Local::now().date_naive())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod session;
pub mod storage;
pub mod sync;

pub use error::{LedgerError, LedgerResult};
