//! Monthly salary map
//!
//! Salaries are declared once per month. A month without an entry has no
//! salary yet; once set, the value is read-only for the rest of its life.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthKey};

/// Month key to declared salary
///
/// Deserialization goes through [`SalaryMap::set`], so a hand-edited file
/// cannot smuggle in amounts the command line would refuse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<MonthKey, Money>",
    into = "BTreeMap<MonthKey, Money>"
)]
pub struct SalaryMap {
    salaries: BTreeMap<MonthKey, Money>,
}

impl SalaryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Salary declared for a month, if any
    pub fn get(&self, month: &MonthKey) -> Option<Money> {
        self.salaries.get(month).copied()
    }

    /// Salary used in balance arithmetic (zero when undeclared)
    pub fn effective(&self, month: &MonthKey) -> Money {
        self.get(month).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.salaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.salaries.is_empty()
    }

    /// Iterate in month order
    pub fn iter(&self) -> impl Iterator<Item = (&MonthKey, &Money)> {
        self.salaries.iter()
    }

    /// Declare the salary for a month
    ///
    /// Fails if the amount is negative or the month already has a salary.
    pub fn set(&mut self, month: MonthKey, amount: Money) -> LedgerResult<()> {
        if amount.is_negative() {
            return Err(LedgerError::Validation(
                "Monthly salary cannot be negative".into(),
            ));
        }
        if !amount.is_within_limit() {
            return Err(LedgerError::Validation(format!(
                "Monthly salary {} exceeds {}",
                amount,
                Money::limit()
            )));
        }
        if let Some(existing) = self.get(&month) {
            return Err(LedgerError::Validation(format!(
                "Salary for {} is already set to {}",
                month, existing
            )));
        }

        self.salaries.insert(month, amount);
        debug!(%month, %amount, "Declared monthly salary");
        Ok(())
    }

    /// Copy of this map with one more salary
    pub fn with_salary(&self, month: MonthKey, amount: Money) -> LedgerResult<Self> {
        let mut next = self.clone();
        next.set(month, amount)?;
        Ok(next)
    }
}

impl TryFrom<BTreeMap<MonthKey, Money>> for SalaryMap {
    type Error = LedgerError;

    fn try_from(entries: BTreeMap<MonthKey, Money>) -> LedgerResult<Self> {
        let mut salaries = SalaryMap::new();
        for (month, amount) in entries {
            salaries.set(month, amount)?;
        }
        Ok(salaries)
    }
}

impl From<SalaryMap> for BTreeMap<MonthKey, Money> {
    fn from(map: SalaryMap) -> Self {
        map.salaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut salaries = SalaryMap::new();
        assert!(salaries.get(&month("2024-01")).is_none());
        assert_eq!(salaries.effective(&month("2024-01")), Money::zero());

        salaries.set(month("2024-01"), Money::from_units(5000)).unwrap();
        assert_eq!(salaries.get(&month("2024-01")), Some(Money::from_units(5000)));
        assert!(salaries.get(&month("2024-02")).is_none());
    }

    #[test]
    fn test_salary_is_read_only_once_set() {
        let mut salaries = SalaryMap::new();
        salaries.set(month("2024-01"), Money::from_units(5000)).unwrap();

        let err = salaries
            .set(month("2024-01"), Money::from_units(6000))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(salaries.get(&month("2024-01")), Some(Money::from_units(5000)));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let mut salaries = SalaryMap::new();
        assert!(salaries
            .set(month("2024-01"), Money::from_units(-1))
            .unwrap_err()
            .is_validation());
        assert!(salaries.is_empty());
    }

    #[test]
    fn test_with_salary_is_pure() {
        let salaries = SalaryMap::new();
        let next = salaries
            .with_salary(month("2024-02"), Money::from_units(10))
            .unwrap();
        assert!(salaries.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_serialization() {
        let mut salaries = SalaryMap::new();
        salaries.set(month("2024-01"), Money::from_units(5000)).unwrap();

        let json = serde_json::to_string(&salaries).unwrap();
        assert_eq!(json, r#"{"2024-01":"5000"}"#);
        let back: SalaryMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, salaries);
    }

    #[test]
    fn test_deserialize_rejects_negative_salary() {
        let result: Result<SalaryMap, _> = serde_json::from_str(r#"{"2024-01":"-5"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_salary_over_limit_rejected() {
        let mut salaries = SalaryMap::new();
        let huge = Money::limit() + Money::from_units(1);
        assert!(salaries.set(month("2024-01"), huge).unwrap_err().is_validation());
    }
}
