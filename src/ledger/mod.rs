//! In-memory ledger state
//!
//! The ledger store owns the expense records; the salary map owns the
//! declared monthly salaries. Both are keyed by the same [`MonthKey`] type.
//!
//! [`MonthKey`]: crate::models::MonthKey

pub mod salary;
pub mod store;

pub use salary::SalaryMap;
pub use store::LedgerStore;
