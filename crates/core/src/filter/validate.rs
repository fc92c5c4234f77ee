// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Validation of raw filter clauses into a [`FilterSet`].
//!
//! Validation is strict and all-or-nothing: any invalid clause rejects the
//! whole request, with no partial application. Checks run in a fixed order
//! so the reported rejection class is deterministic:
//!
//! 1. clause count within [1, 5], otherwise malformed;
//! 2. at most one `position` clause, otherwise conflict - checked before
//!    per-clause structure, so duplicate position clauses report as a
//!    conflict regardless of other clause validity;
//! 3. per-clause key, operator, and value shape, otherwise malformed.

use crate::error::{Error, Result};

use super::clause::{EqOp, FilterClause, FilterSet, OrderOp, RawClause};

/// Minimum number of clauses in a request.
pub const MIN_FILTERS: usize = 1;
/// Maximum number of clauses in a request.
pub const MAX_FILTERS: usize = 5;

impl FilterSet {
    /// Validate an ordered list of raw clauses into a `FilterSet`.
    ///
    /// On success the typed clauses preserve the submitted order and
    /// values exactly; validation never reorders or deduplicates.
    ///
    /// # Errors
    ///
    /// - [`Error::FilterCountOutOfRange`] for fewer than 1 or more than 5
    ///   clauses
    /// - [`Error::ConflictingPositionFilters`] for two or more `position`
    ///   clauses
    /// - [`Error::UnknownFilterKey`], [`Error::UnknownFilterOperator`],
    ///   [`Error::InvalidPositionOperator`], or
    ///   [`Error::NonNumericFilterValue`] for per-clause violations
    pub fn validate(raw: &[RawClause]) -> Result<FilterSet> {
        if raw.len() < MIN_FILTERS || raw.len() > MAX_FILTERS {
            return Err(Error::FilterCountOutOfRange {
                count: raw.len(),
                min: MIN_FILTERS,
                max: MAX_FILTERS,
            });
        }

        let position_clauses = raw.iter().filter(|c| c.key == "position").count();
        if position_clauses > 1 {
            return Err(Error::ConflictingPositionFilters);
        }

        raw.iter().map(validate_clause).collect::<Result<Vec<_>>>().map(FilterSet)
    }
}

/// Validate a single raw clause into its typed form.
fn validate_clause(raw: &RawClause) -> Result<FilterClause> {
    match raw.key.as_str() {
        "age" => Ok(FilterClause::Age {
            op: parse_order_op(&raw.expr)?,
            bound: parse_bound("age", &raw.value)?,
        }),
        "experience" => Ok(FilterClause::Experience {
            op: parse_order_op(&raw.expr)?,
            bound: parse_bound("experience", &raw.value)?,
        }),
        "position" => Ok(FilterClause::Position {
            op: parse_eq_op(&raw.expr)?,
            value: raw.value.clone(),
        }),
        other => Err(Error::UnknownFilterKey(other.to_string())),
    }
}

/// Parse an ordering comparator symbol.
fn parse_order_op(s: &str) -> Result<OrderOp> {
    match s {
        "<" => Ok(OrderOp::Lt),
        "<=" => Ok(OrderOp::Le),
        "=" => Ok(OrderOp::Eq),
        "!=" => Ok(OrderOp::Ne),
        ">=" => Ok(OrderOp::Ge),
        ">" => Ok(OrderOp::Gt),
        other => Err(Error::UnknownFilterOperator(other.to_string())),
    }
}

/// Parse an equality comparator symbol for the position key.
///
/// Symbols outside the full ordering set report as unknown; ordering
/// symbols other than `=`/`!=` report as invalid for a string field.
fn parse_eq_op(s: &str) -> Result<EqOp> {
    match s {
        "=" => Ok(EqOp::Eq),
        "!=" => Ok(EqOp::Ne),
        "<" | "<=" | ">=" | ">" => Err(Error::InvalidPositionOperator(s.to_string())),
        other => Err(Error::UnknownFilterOperator(other.to_string())),
    }
}

/// Parse a numeric clause value: a non-empty all-digit string.
///
/// No sign, no decimal point. All-digit values too large for `i64` are
/// rejected as malformed rather than saturated.
fn parse_bound(key: &'static str, value: &str) -> Result<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::NonNumericFilterValue {
            key,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| Error::NonNumericFilterValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
