//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the domain:
//! money amounts, month keys, and expense records.

pub mod expense;
pub mod money;
pub mod month;

pub use expense::{parse_date, Expense, ExpenseValidationError, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
