// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Employee record types and field validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{self, elapsed_years};
use crate::error::{Error, Result};

// Input length limits (characters)
pub const MIN_FIELD_LENGTH: usize = 1;
pub const MAX_FIELD_LENGTH: usize = 120;

/// A stored employee record.
///
/// The identifier is assigned by the store on insert and never changes.
/// `(name, birthdate)` is unique across all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier, unique and immutable.
    pub id: i64,
    /// Full name, 1-120 characters.
    pub name: String,
    /// Date of birth; basis for the `age` filter key.
    #[serde(with = "dates::serde_format")]
    pub birthdate: NaiveDate,
    /// Job position, 1-120 characters. Compared case-sensitively.
    pub position: String,
    /// Enrollment date; basis for the `experience` filter key.
    #[serde(rename = "enrollmentdate", with = "dates::serde_format")]
    pub enrollment_date: NaiveDate,
}

/// Payload for creating a new employee: an [`Employee`] minus the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    #[serde(with = "dates::serde_format")]
    pub birthdate: NaiveDate,
    pub position: String,
    #[serde(rename = "enrollmentdate", with = "dates::serde_format")]
    pub enrollment_date: NaiveDate,
}

impl Employee {
    /// Whole years of age as of the given date.
    pub fn age(&self, on: NaiveDate) -> i64 {
        elapsed_years(self.birthdate, on)
    }

    /// Whole years of tenure ("experience") as of the given date.
    pub fn tenure(&self, on: NaiveDate) -> i64 {
        elapsed_years(self.enrollment_date, on)
    }
}

impl NewEmployee {
    /// Validate field lengths before insertion.
    ///
    /// Dates are already structurally valid here (they parsed into
    /// `NaiveDate` at the boundary), so only the string fields are checked.
    pub fn validate(&self) -> Result<()> {
        validate_field("name", &self.name)?;
        validate_field("position", &self.position)?;
        Ok(())
    }
}

/// Validate that a string field is within the 1-120 character limits.
fn validate_field(field: &'static str, value: &str) -> Result<()> {
    let len = value.chars().count();
    if len < MIN_FIELD_LENGTH {
        return Err(Error::FieldEmpty { field });
    }
    if len > MAX_FIELD_LENGTH {
        return Err(Error::FieldTooLong {
            field,
            actual: len,
            max: MAX_FIELD_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "employee_tests.rs"]
mod tests;
