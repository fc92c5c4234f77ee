// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Calendar-date handling for employee records.
//!
//! All dates in the system (storage, wire, user input) use the textual
//! format `DD.MM.YYYY`. This module owns parsing, formatting, and the
//! whole-elapsed-years computation backing the `age` and `experience`
//! filter keys.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Textual date format used in storage and on the wire.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` date string.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the string does not parse in the
/// expected format.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whole calendar years elapsed from `from` to `on`.
///
/// The naive year difference is decremented by one when the anniversary
/// has not yet occurred in `on`'s year, i.e. when `(month, day)` of `on`
/// is lexicographically less than `(month, day)` of `from`. A date before
/// `from` yields a negative count rather than saturating.
pub fn elapsed_years(from: NaiveDate, on: NaiveDate) -> i64 {
    let mut years = i64::from(on.year()) - i64::from(from.year());
    if (on.month(), on.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Serde support for `NaiveDate` fields in the `DD.MM.YYYY` wire format.
pub mod serde_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_date(&s).map_err(|_| {
            de::Error::custom(format!("invalid date '{s}', expected DD.MM.YYYY"))
        })
    }
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
