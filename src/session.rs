//! Session state and command handlers
//!
//! A [`Session`] owns the ledger store, the salary map and the currently bound
//! file handle. Each command computes the next state with a pure transition,
//! persists it, and only then adopts it, so a failed write never leaves memory
//! ahead of the file.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{LedgerStore, SalaryMap};
use crate::models::{Expense, Money, MonthKey};
use crate::storage::SalaryFile;
use crate::sync::{codec, FileHandle};

/// Everything one user session works on
#[derive(Debug, Default)]
pub struct Session {
    ledger: LedgerStore,
    salaries: SalaryMap,
    file: Option<Box<dyn FileHandle>>,
    salary_file: Option<SalaryFile>,
}

impl Session {
    /// A session with no file bound yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session on an existing file
    pub fn open(handle: Box<dyn FileHandle>) -> LedgerResult<Self> {
        let mut session = Self::new();
        session.open_file(handle)?;
        Ok(session)
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn salaries(&self) -> &SalaryMap {
        &self.salaries
    }

    /// The bound file, if any
    pub fn file(&self) -> Option<&dyn FileHandle> {
        self.file.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.file.is_some()
    }

    /// Bind a new file and start an empty ledger in it
    ///
    /// Salaries declared for the previous contents of that path are cleared
    /// first; if that fails the CSV file is left as it was.
    pub fn create_file(&mut self, handle: Box<dyn FileHandle>) -> LedgerResult<()> {
        let ledger = LedgerStore::new();
        let salaries = SalaryMap::new();
        let salary_file = handle.path().map(SalaryFile::beside);

        if let Some(sidecar) = salary_file.as_ref().filter(|s| s.path().exists()) {
            sidecar.save(&salaries)?;
        }
        handle.write_all(&codec::serialize(ledger.records()))?;

        info!(file = %handle.describe(), "Created ledger file");
        self.commit(ledger, salaries, handle, salary_file);
        Ok(())
    }

    /// Bind an existing file and replace the ledger with its contents
    ///
    /// Nothing changes if the file cannot be read or any row is malformed.
    pub fn open_file(&mut self, handle: Box<dyn FileHandle>) -> LedgerResult<()> {
        let text = handle.read_all()?;
        let ledger = LedgerStore::from_records(codec::parse(&text)?);

        let salary_file = handle.path().map(SalaryFile::beside);
        let salaries = match &salary_file {
            Some(sidecar) => sidecar.load()?,
            None => SalaryMap::new(),
        };

        info!(
            file = %handle.describe(),
            records = ledger.len(),
            salaries = salaries.len(),
            "Opened ledger file"
        );
        self.commit(ledger, salaries, handle, salary_file);
        Ok(())
    }

    /// Validate and record an expense, then rewrite the bound file
    ///
    /// `today` bounds the date: expenses cannot be recorded in the future.
    pub fn add_expense(
        &mut self,
        date: &str,
        amount: &str,
        today: NaiveDate,
    ) -> LedgerResult<Expense> {
        let handle = self.file.as_ref().ok_or(LedgerError::NoFileSelected)?;

        let expense =
            Expense::parse(date, amount).map_err(|e| LedgerError::Validation(e.to_string()))?;
        expense
            .ensure_not_after(today)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let next = self.ledger.with_expense(expense);
        handle.write_all(&codec::serialize(next.records()))?;

        debug!(date = %expense.date, amount = %expense.amount, "Recorded expense");
        self.ledger = next;
        Ok(expense)
    }

    /// Declare the salary for a month and persist it beside the bound file
    pub fn set_salary(&mut self, month: MonthKey, amount: &str) -> LedgerResult<Money> {
        if self.file.is_none() {
            return Err(LedgerError::NoFileSelected);
        }

        let amount = Money::parse(amount)
            .map_err(|e| LedgerError::Validation(format!("Invalid salary: {}", e)))?;
        let next = self.salaries.with_salary(month, amount)?;

        if let Some(sidecar) = &self.salary_file {
            sidecar.save(&next)?;
        }

        debug!(%month, %amount, "Declared salary");
        self.salaries = next;
        Ok(amount)
    }

    fn commit(
        &mut self,
        ledger: LedgerStore,
        salaries: SalaryMap,
        handle: Box<dyn FileHandle>,
        salary_file: Option<SalaryFile>,
    ) {
        self.ledger = ledger;
        self.salaries = salaries;
        self.file = Some(handle);
        self.salary_file = salary_file;
    }
}
