//! Month table rendering
//!
//! Builds one table per month from the ledger and the salary map. The
//! remaining balance is computed row by row: salary minus the running total of
//! the month's expenses up to and including that row.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::ledger::{LedgerStore, SalaryMap};
use crate::models::{Expense, Money, MonthKey, DATE_FORMAT};

/// One expense line of a month table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRow {
    pub expense: Expense,
    /// Salary used in the arithmetic (zero when undeclared)
    pub salary: Money,
    /// Salary minus the running total through this row
    pub remaining: Money,
}

/// Everything shown for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub month: MonthKey,
    /// Declared salary, if any
    pub salary: Option<Money>,
    pub rows: Vec<MonthRow>,
    pub total: Money,
}

impl MonthView {
    /// Build the view for one month's (date ordered) expenses
    pub fn build(month: MonthKey, expenses: &[Expense], salary: Option<Money>) -> Self {
        let effective = salary.unwrap_or_default();
        let mut running = Money::zero();

        let rows = expenses
            .iter()
            .map(|expense| {
                running += expense.amount;
                MonthRow {
                    expense: *expense,
                    salary: effective,
                    remaining: effective - running,
                }
            })
            .collect();

        Self {
            month,
            salary,
            rows,
            total: running,
        }
    }

    /// Salary left after every expense of the month
    pub fn remaining(&self) -> Money {
        self.salary.unwrap_or_default() - self.total
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining().is_negative()
    }
}

/// Views for every month with expenses, ascending
pub fn month_views(ledger: &LedgerStore, salaries: &SalaryMap) -> Vec<MonthView> {
    ledger
        .group_by_month()
        .into_iter()
        .map(|(month, expenses)| MonthView::build(month, &expenses, salaries.get(&month)))
        .collect()
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Monthly Salary")]
    salary: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Render one month as a titled table with a trailing total row
pub fn format_month_view(view: &MonthView, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expenses for {}\n", view.month.friendly()));

    match view.salary {
        Some(salary) => output.push_str(&format!(
            "Monthly Salary: {}\n",
            salary.format_with_symbol(symbol)
        )),
        None => output.push_str(&format!(
            "Monthly Salary: not set (use 'expenses salary set {} <amount>')\n",
            view.month
        )),
    }

    let mut rows: Vec<TableRow> = view
        .rows
        .iter()
        .map(|row| TableRow {
            date: row.expense.date.format(DATE_FORMAT).to_string(),
            expense: row.expense.amount.format_with_symbol(symbol),
            salary: row.salary.format_with_symbol(symbol),
            remaining: row.remaining.format_with_symbol(symbol),
        })
        .collect();

    rows.push(TableRow {
        date: "Total".to_string(),
        expense: view.total.format_with_symbol(symbol),
        salary: String::new(),
        remaining: String::new(),
    });

    output.push_str(&Table::new(rows).with(Style::psql()).to_string());
    output.push('\n');
    output
}

/// Render every month (or just one) of the ledger
pub fn format_ledger(
    ledger: &LedgerStore,
    salaries: &SalaryMap,
    symbol: &str,
    only: Option<MonthKey>,
) -> String {
    let views: Vec<MonthView> = month_views(ledger, salaries)
        .into_iter()
        .filter(|view| only.map_or(true, |month| view.month == month))
        .collect();

    if views.is_empty() {
        return match only {
            Some(month) => format!("No expenses recorded for {}.", month.friendly()),
            None => "No expenses recorded.".to_string(),
        };
    }

    views
        .iter()
        .map(|view| format_month_view(view, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}
