//! Ledger store
//!
//! Holds the session's expense records, always sorted ascending by date.
//! Records sharing a date keep the order they were inserted in.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Money, MonthKey};

/// Ordered collection of expense records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerStore {
    records: Vec<Expense>,
}

impl LedgerStore {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from records in any order
    pub fn from_records(records: Vec<Expense>) -> Self {
        let mut store = Self::new();
        store.load_from_records(records);
        store
    }

    /// All records, ascending by date
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record
    pub fn reset(&mut self) {
        debug!(dropped = self.records.len(), "Resetting ledger");
        self.records.clear();
    }

    /// Validate raw form input and insert the resulting expense
    ///
    /// On failure the ledger is left untouched.
    pub fn add_expense(&mut self, date: &str, amount: &str) -> LedgerResult<Expense> {
        let expense =
            Expense::parse(date, amount).map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.insert(expense);
        Ok(expense)
    }

    /// Insert an already validated expense at its sorted position
    pub fn insert(&mut self, expense: Expense) {
        // After any existing record with the same date
        let index = self.records.partition_point(|e| e.date <= expense.date);
        self.records.insert(index, expense);
        debug!(date = %expense.date, amount = %expense.amount, index, "Inserted expense");
    }

    /// Copy of this ledger with one more expense
    pub fn with_expense(&self, expense: Expense) -> Self {
        let mut next = self.clone();
        next.insert(expense);
        next
    }

    /// Replace every record, then restore date order
    pub fn load_from_records(&mut self, records: Vec<Expense>) {
        self.records = records;
        // Stable, so same-date rows keep file order
        self.records.sort_by_key(|e| e.date);
        debug!(count = self.records.len(), "Loaded ledger records");
    }

    /// Partition the records by month, each group ascending by date
    pub fn group_by_month(&self) -> BTreeMap<MonthKey, Vec<Expense>> {
        let mut groups: BTreeMap<MonthKey, Vec<Expense>> = BTreeMap::new();
        for expense in &self.records {
            groups.entry(expense.month()).or_default().push(*expense);
        }
        groups
    }

    /// Sum of the amounts recorded in a month; zero for a month with no records
    pub fn monthly_total(&self, month: &MonthKey) -> Money {
        self.group_by_month()
            .get(month)
            .map(|group| group.iter().map(|e| e.amount).sum())
            .unwrap_or_default()
    }

    /// Months that have at least one record, ascending
    pub fn months(&self) -> Vec<MonthKey> {
        self.group_by_month().into_keys().collect()
    }

    /// Earliest and latest record dates
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Sum of every record
    pub fn total(&self) -> Money {
        self.records.iter().map(|e| e.amount).sum()
    }
}
