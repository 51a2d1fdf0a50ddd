//! Summary formatting for terminal output
//!
//! One line per month: salary, spent, remaining and record count, followed
//! by a ledger-wide total.

use super::month::MonthView;
use crate::models::Money;

/// Format month summaries as an aligned table
pub fn format_month_summaries(views: &[MonthView], symbol: &str) -> String {
    if views.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16}  {:>14}  {:>14}  {:>14}  {:>7}\n",
        "Month", "Salary", "Spent", "Remaining", "Entries"
    ));
    output.push_str(&separator(73));
    output.push('\n');

    for view in views {
        let salary = view
            .salary
            .map(|s| s.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string());
        let flag = if view.is_overspent() { " !" } else { "" };

        output.push_str(&format!(
            "{:<16}  {:>14}  {:>14}  {:>14}  {:>7}{}\n",
            view.month.friendly(),
            salary,
            view.total.format_with_symbol(symbol),
            view.remaining().format_with_symbol(symbol),
            view.rows.len(),
            flag,
        ));
    }

    let spent: Money = views.iter().map(|v| v.total).sum();
    let entries: usize = views.iter().map(|v| v.rows.len()).sum();

    output.push_str(&separator(73));
    output.push('\n');
    output.push_str(&format!(
        "{:<16}  {:>14}  {:>14}  {:>14}  {:>7}\n",
        "TOTAL",
        "",
        spent.format_with_symbol(symbol),
        "",
        entries
    ));

    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::month::month_views;
    use crate::ledger::{LedgerStore, SalaryMap};
    use crate::models::{Expense, MonthKey};

    #[test]
    fn test_month_summaries() {
        let store = LedgerStore::from_records(vec![
            Expense::parse("2024-01-05", "100").unwrap(),
            Expense::parse("2024-01-20", "50").unwrap(),
            Expense::parse("2024-02-01", "30").unwrap(),
        ]);
        let mut salaries = SalaryMap::new();
        salaries
            .set(MonthKey::parse("2024-01").unwrap(), Money::from_units(100))
            .unwrap();

        let output = format_month_summaries(&month_views(&store, &salaries), "$");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Month"));
        assert!(lines[2].starts_with("January 2024"));
        assert!(lines[2].contains("$150.00"));
        assert!(lines[2].contains("-$50.00"));
        assert!(lines[2].ends_with(" !"));
        assert!(lines[3].starts_with("February 2024"));
        assert!(lines[5].contains("$180.00"));
    }

    #[test]
    fn test_empty_summaries() {
        assert_eq!(format_month_summaries(&[], "$"), "No expenses recorded.");
    }
}
