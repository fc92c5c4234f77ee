// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Error types for roster-core operations.

use thiserror::Error;

/// All possible errors that can occur in roster-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("filter count out of range: got {count}, expected between {min} and {max}")]
    FilterCountOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("unknown filter key: '{0}'\n  hint: valid keys are: age, experience, position")]
    UnknownFilterKey(String),

    #[error("unknown filter operator: '{0}'\n  hint: valid operators are: <, <=, =, !=, >=, >")]
    UnknownFilterOperator(String),

    #[error("invalid operator '{0}' for position filter\n  hint: position supports only: =, !=")]
    InvalidPositionOperator(String),

    #[error("non-numeric value '{value}' for {key} filter")]
    NonNumericFilterValue { key: &'static str, value: String },

    #[error("conflicting position filters: at most one position clause is allowed")]
    ConflictingPositionFilters,

    #[error("invalid date '{0}'\n  hint: expected DD.MM.YYYY")]
    InvalidDate(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("employee already exists with name '{name}' and birthdate {birthdate}")]
    DuplicateEmployee { name: String, birthdate: String },

    #[error("employee not found: {0}")]
    EmployeeNotFound(i64),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Boundary classification of an error.
///
/// Request handlers map each kind to a numeric status code; the variants
/// mirror the four outcome classes of the service: malformed input,
/// semantic conflict, absent resource, and internal fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structurally or semantically malformed input.
    BadRequest,
    /// Input valid in shape but conflicting with existing state or itself.
    Conflict,
    /// The addressed resource does not exist.
    NotFound,
    /// Storage or data-integrity fault; isolated to the request.
    Internal,
}

impl Error {
    /// Classify this error for the request/response boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FilterCountOutOfRange { .. }
            | Error::UnknownFilterKey(_)
            | Error::UnknownFilterOperator(_)
            | Error::InvalidPositionOperator(_)
            | Error::NonNumericFilterValue { .. }
            | Error::InvalidDate(_)
            | Error::FieldEmpty { .. }
            | Error::FieldTooLong { .. }
            | Error::MalformedRequest(_) => ErrorKind::BadRequest,

            Error::ConflictingPositionFilters | Error::DuplicateEmployee { .. } => {
                ErrorKind::Conflict
            }

            Error::EmployeeNotFound(_) => ErrorKind::NotFound,

            Error::CorruptedData(_) | Error::Database(_) | Error::Io(_) | Error::Json(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// A specialized Result type for roster-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
