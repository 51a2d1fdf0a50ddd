//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts keep exactly the digits the user
//! typed. Provides safe arithmetic operations and formatting.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// Represents a monetary amount as an exact decimal
///
/// `Display` writes the natural decimal form (`100`, `12.5`), which is what the
/// CSV file stores. Use [`Money::format_with_symbol`] for the two-decimal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_units(100);
    /// assert_eq!(amount.to_string(), "100");
    /// ```
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a Money amount from hundredths of the currency unit
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1250);
    /// assert_eq!(amount.to_string(), "12.5");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Largest magnitude a single amount may have
    pub fn limit() -> Self {
        Self(Decimal::from(MAX_UNITS))
    }

    /// Check that the magnitude does not exceed [`Money::limit`]
    ///
    /// Sums of in-limit amounts stay far inside `Decimal`'s range, so ledger
    /// arithmetic cannot overflow.
    pub fn is_within_limit(&self) -> bool {
        self.0.abs() <= Decimal::from(MAX_UNITS)
    }

    /// Lossy conversion for sinks that only understand floating point
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Parse a money amount typed by the user
    ///
    /// Accepts formats: "10.50", "-10.50", "Rs. 10.50", "$10.50", "10".
    /// After the optional sign and currency symbol only digits and one
    /// decimal point are allowed, so `--5`, `1_000`, `1,000`, `NaN` and
    /// `inf` are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        // Handle negative sign at start
        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        // Remove currency symbol if present
        let digits = CURRENCY_PREFIXES
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix))
            .unwrap_or(rest)
            .trim_start();

        parse_digits(digits, s, negative)
    }

    /// Parse an amount as stored in the CSV file
    ///
    /// Only an optional leading `-`, digits and one decimal point; no
    /// currency symbol and no inner whitespace.
    pub fn parse_plain(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        match s.strip_prefix('-') {
            Some(digits) => parse_digits(digits, s, true),
            None => parse_digits(s, s, false),
        }
    }

    /// Format with a currency symbol and exactly two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.0.round_dp(2);
        if rounded < Decimal::ZERO {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded)
        }
    }
}

const CURRENCY_PREFIXES: [&str; 4] = ["Rs.", "Rs", "$", "₹"];

// One quadrillion currency units
const MAX_UNITS: i64 = 1_000_000_000_000_000;

fn parse_digits(digits: &str, original: &str, negative: bool) -> Result<Money, MoneyParseError> {
    let well_formed = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !well_formed {
        return Err(MoneyParseError::InvalidFormat(original.to_string()));
    }

    let value = Decimal::from_str(digits)
        .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?;
    let amount = Money(if negative { -value } else { value });

    if !amount.is_within_limit() {
        return Err(MoneyParseError::TooLarge(original.to_string()));
    }
    Ok(amount)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount '{}' exceeds {}", s, Money::limit())
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
