// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Filter clause types.
//!
//! [`RawClause`] is the loosely-typed wire shape; validation turns a list
//! of raw clauses into a [`FilterSet`] of closed-variant [`FilterClause`]
//! values, so evaluation is an exhaustive match rather than string
//! comparison.

use serde::{Deserialize, Serialize};

/// A filter clause as submitted on the wire, before validation.
///
/// Exactly three fields; unknown fields make the request malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawClause {
    /// Field to filter on: `age`, `experience`, or `position`.
    pub key: String,
    /// Comparison operator symbol.
    pub expr: String,
    /// Bound to compare against: decimal digits for numeric keys,
    /// a literal string for `position`.
    pub value: String,
}

/// Fields that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    /// Whole years since birthdate.
    Age,
    /// Whole years since enrollment date.
    Experience,
    /// The position string.
    Position,
}

impl FilterKey {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Age => "age",
            FilterKey::Experience => "experience",
            FilterKey::Position => "position",
        }
    }

    /// Returns valid key names for error messages.
    pub fn valid_names() -> &'static str {
        "age, experience, position"
    }
}

/// Ordering comparators for the numeric keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOp {
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Equal (`=`).
    Eq,
    /// Not equal (`!=`).
    Ne,
    /// Greater than or equal (`>=`).
    Ge,
    /// Greater than (`>`).
    Gt,
}

impl OrderOp {
    /// Returns valid operator symbols for error messages.
    pub fn valid_symbols() -> &'static str {
        "<, <=, =, !=, >=, >"
    }
}

/// Equality comparators for the `position` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqOp {
    /// Equal (`=`).
    Eq,
    /// Not equal (`!=`).
    Ne,
}

/// A validated filter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Compare computed age against an integer bound.
    Age { op: OrderOp, bound: i64 },
    /// Compare computed tenure against an integer bound.
    Experience { op: OrderOp, bound: i64 },
    /// Compare the position string exactly (case-sensitive).
    Position { op: EqOp, value: String },
}

impl FilterClause {
    /// The key this clause targets.
    pub fn key(&self) -> FilterKey {
        match self {
            FilterClause::Age { .. } => FilterKey::Age,
            FilterClause::Experience { .. } => FilterKey::Experience,
            FilterClause::Position { .. } => FilterKey::Position,
        }
    }
}

/// A validated, ordered set of 1-5 clauses combined as a logical AND.
///
/// Construction goes through [`FilterSet::validate`]; the clause order of
/// the submitted request is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet(pub(super) Vec<FilterClause>);

impl FilterSet {
    /// The validated clauses, in submission order.
    pub fn clauses(&self) -> &[FilterClause] {
        &self.0
    }

    /// Number of clauses in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the set has no clauses. Unreachable for validated sets but
    /// kept for the clippy `len_without_is_empty` contract.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "clause_tests.rs"]
mod tests;
