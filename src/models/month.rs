//! Month key representation
//!
//! A month key (`YYYY-MM`) identifies a calendar month. It groups expenses and
//! indexes the salary map, so both sides always share this one type.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, checking that the month is in 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human-friendly form, e.g. "January 2024"
    pub fn friendly(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialized as the `YYYY-MM` string so it can key JSON maps.
impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month '{}', expected YYYY-MM", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_date_zero_pads() {
        let key = MonthKey::from_date(date(2024, 1, 5));
        assert_eq!(key.to_string(), "2024-01");
        assert_eq!(MonthKey::from_date(date(2024, 11, 30)).to_string(), "2024-11");
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthKey::parse("2024-02").unwrap(), MonthKey::new(2024, 2).unwrap());
        assert_eq!(
            MonthKey::parse("2024-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert!(MonthKey::parse("2024-1").is_err());
        assert!(MonthKey::parse("January").is_err());
        assert!(MonthKey::parse("2024-01-05").is_err());
        assert!(MonthKey::parse("+024-01").is_err());
        assert!(MonthKey::parse("2024-+1").is_err());
    }

    #[test]
    fn test_ordering() {
        let mut keys = vec![
            MonthKey::new(2024, 2).unwrap(),
            MonthKey::new(2023, 12).unwrap(),
            MonthKey::new(2024, 1).unwrap(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_friendly() {
        assert_eq!(MonthKey::new(2024, 1).unwrap().friendly(), "January 2024");
        assert_eq!(
            MonthKey::from_date(date(2023, 12, 31)).friendly(),
            "December 2023"
        );
    }

    #[test]
    fn test_serializes_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(MonthKey::new(2024, 1).unwrap(), 5);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2024-01":5}"#);

        let back: BTreeMap<MonthKey, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
