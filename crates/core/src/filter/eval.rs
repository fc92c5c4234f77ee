// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Evaluation of filter clauses against employee records.

use chrono::NaiveDate;

use crate::employee::Employee;

use super::clause::{EqOp, FilterClause, FilterSet, OrderOp};

impl FilterClause {
    /// Evaluate this clause against an employee as of a given date.
    ///
    /// Numeric clauses compare the derived whole-year value (age since
    /// birthdate, tenure since enrollment date) against the clause bound.
    /// Position clauses compare the position string exactly, with no case
    /// folding or normalization.
    ///
    /// Pure predicate: no side effects, no stored state consulted beyond
    /// the record snapshot.
    pub fn matches(&self, employee: &Employee, today: NaiveDate) -> bool {
        match self {
            FilterClause::Age { op, bound } => op.compare(employee.age(today), *bound),
            FilterClause::Experience { op, bound } => op.compare(employee.tenure(today), *bound),
            FilterClause::Position { op, value } => op.compare(&employee.position, value),
        }
    }
}

impl FilterSet {
    /// Evaluate all clauses in order as a logical AND.
    ///
    /// Short-circuits on the first clause that evaluates to false; later
    /// clauses are not evaluated.
    pub fn matches(&self, employee: &Employee, today: NaiveDate) -> bool {
        self.clauses().iter().all(|c| c.matches(employee, today))
    }
}

impl OrderOp {
    /// Compare two integers.
    fn compare(&self, actual: i64, bound: i64) -> bool {
        match self {
            OrderOp::Lt => actual < bound,
            OrderOp::Le => actual <= bound,
            OrderOp::Eq => actual == bound,
            OrderOp::Ne => actual != bound,
            OrderOp::Ge => actual >= bound,
            OrderOp::Gt => actual > bound,
        }
    }
}

impl EqOp {
    /// Compare two strings exactly.
    fn compare(&self, actual: &str, value: &str) -> bool {
        match self {
            EqOp::Eq => actual == value,
            EqOp::Ne => actual != value,
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
