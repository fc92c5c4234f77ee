// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Filter mini-language for querying employee records.
//!
//! A request carries an ordered list of 1-5 clauses, each of the form:
//!
//! ```text
//! { "key": ..., "expr": ..., "value": ... }
//! ```
//!
//! # Keys
//!
//! - `age` - whole years since birthdate (computed at evaluation time)
//! - `experience` - whole years since enrollment date
//! - `position` - the position string, compared exactly
//!
//! # Operators
//!
//! - `age` / `experience`: `<`, `<=`, `=`, `!=`, `>=`, `>` against a
//!   non-negative integer value
//! - `position`: `=`, `!=` against a literal string
//!
//! Clauses combine as a logical AND with short-circuit evaluation. At most
//! one clause may target `position`; a second one is a conflict, not a
//! malformed request.

mod clause;
mod eval;
mod validate;

pub use clause::{EqOp, FilterClause, FilterKey, FilterSet, OrderOp, RawClause};
pub use validate::{MAX_FILTERS, MIN_FILTERS};
