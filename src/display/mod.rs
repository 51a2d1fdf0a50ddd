//! Display formatting for terminal output
//!
//! Pure presentation: everything here is computed from the ledger store and
//! the salary map, and returned as strings.

pub mod month;
pub mod report;

pub use month::{format_ledger, format_month_view, month_views, MonthRow, MonthView};
pub use report::format_month_summaries;
