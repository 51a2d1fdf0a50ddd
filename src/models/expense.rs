//! Expense record model
//!
//! An expense is a dated, non-negative amount. Records are immutable once
//! created; the ledger replaces them wholesale on reload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::MonthKey;

/// Date format emitted by the date picker and stored in the CSV file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    InvalidDate(String),
    InvalidAmount(String),
    NegativeAmount,
    FutureDate { date: NaiveDate, today: NaiveDate },
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "Invalid date '{}', expected YYYY-MM-DD", s),
            Self::InvalidAmount(s) => write!(f, "Invalid amount '{}'", s),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::FutureDate { date, today } => {
                write!(f, "Date {} is after today ({})", date, today)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single dated expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: Money,
}

impl Expense {
    /// Create a validated expense
    pub fn new(date: NaiveDate, amount: Money) -> Result<Self, ExpenseValidationError> {
        let expense = Self { date, amount };
        expense.validate()?;
        Ok(expense)
    }

    /// Build an expense from raw form input
    pub fn parse(date: &str, amount: &str) -> Result<Self, ExpenseValidationError> {
        let date = parse_date(date)?;
        let amount = Money::parse(amount)
            .map_err(|_| ExpenseValidationError::InvalidAmount(amount.trim().to_string()))?;
        Self::new(date, amount)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::InvalidAmount(self.amount.to_string()));
        }
        Ok(())
    }

    /// Reject expenses dated after `today`
    pub fn ensure_not_after(&self, today: NaiveDate) -> Result<(), ExpenseValidationError> {
        if self.date > today {
            return Err(ExpenseValidationError::FutureDate {
                date: self.date,
                today,
            });
        }
        Ok(())
    }

    /// The month this expense is grouped under
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Parse an ISO calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate, ExpenseValidationError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ExpenseValidationError::InvalidDate(s.to_string()))
}
