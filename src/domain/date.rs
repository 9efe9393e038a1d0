//! Calendar dates in the fixed `dd.mm.yyyy` format
//!
//! Every date the program reads or prints goes through this module, so the
//! literal format lives in exactly one place.

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// `chrono` pattern for `dd.mm.yyyy`
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Invalid date format: expected 'dd.mm.yyyy', got '{0}'")]
    Format(String),

    #[error("No such calendar date: {0}")]
    Invalid(String),
}

/// Returns true if `s` is shaped exactly like `dd.mm.yyyy`
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a `dd.mm.yyyy` date
///
/// `chrono` alone accepts single-digit days and months, so the shape is
/// checked first.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let s = input.trim();
    if !has_date_shape(s) {
        return Err(DateError::Format(s.to_string()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateError::Invalid(s.to_string()))
}

/// Formats a date as `dd.mm.yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Serde adapter storing dates as `dd.mm.yyyy` strings
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_date(&s).map_err(serde::de::Error::custom)
    }
}
