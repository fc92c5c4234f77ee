// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::{Error, ErrorKind};
use crate::filter::{EqOp, FilterClause, FilterSet, OrderOp, RawClause};

fn clause(key: &str, expr: &str, value: &str) -> RawClause {
    RawClause {
        key: key.to_string(),
        expr: expr.to_string(),
        value: value.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clause count limits
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_list_is_out_of_range() {
    let err = FilterSet::validate(&[]).unwrap_err();
    assert!(matches!(err, Error::FilterCountOutOfRange { count: 0, .. }));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[test]
fn six_clauses_are_out_of_range() {
    let raw: Vec<RawClause> = (0..6).map(|_| clause("age", "<", "30")).collect();
    let err = FilterSet::validate(&raw).unwrap_err();
    assert!(matches!(err, Error::FilterCountOutOfRange { count: 6, .. }));
}

#[test]
fn every_size_from_one_to_five_validates() {
    for n in MIN_FILTERS..=MAX_FILTERS {
        let raw: Vec<RawClause> = (0..n).map(|_| clause("experience", ">=", "5")).collect();
        let set = FilterSet::validate(&raw).unwrap();
        assert_eq!(set.len(), n);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Position-clause exclusivity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn two_position_clauses_conflict() {
    let raw = vec![
        clause("position", "=", "dev"),
        clause("position", "!=", "qa"),
    ];
    let err = FilterSet::validate(&raw).unwrap_err();
    assert!(matches!(err, Error::ConflictingPositionFilters));
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn duplicate_position_conflicts_even_with_invalid_clauses() {
    // The conflict wins over the malformed numeric clause.
    let raw = vec![
        clause("position", "=", "dev"),
        clause("age", "<", "not a number"),
        clause("position", "=", "qa"),
    ];
    let err = FilterSet::validate(&raw).unwrap_err();
    assert!(matches!(err, Error::ConflictingPositionFilters));
}

#[test]
fn duplicate_position_conflicts_even_with_bad_operators() {
    let raw = vec![
        clause("position", ">", "dev"),
        clause("position", ">", "qa"),
    ];
    let err = FilterSet::validate(&raw).unwrap_err();
    assert!(matches!(err, Error::ConflictingPositionFilters));
}

#[test]
fn one_position_clause_among_numeric_clauses_is_fine() {
    let raw = vec![
        clause("age", ">=", "30"),
        clause("position", "=", "QC engineer"),
        clause("experience", "<", "10"),
    ];
    assert!(FilterSet::validate(&raw).is_ok());
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-clause structure
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_key_is_malformed() {
    let err = FilterSet::validate(&[clause("salary", "<", "100")]).unwrap_err();
    assert!(matches!(err, Error::UnknownFilterKey(k) if k == "salary"));
}

#[test]
fn unknown_operator_is_malformed() {
    let err = FilterSet::validate(&[clause("age", "~", "30")]).unwrap_err();
    assert!(matches!(err, Error::UnknownFilterOperator(_)));
}

#[test]
fn position_with_ordering_operator_is_malformed() {
    for op in ["<", "<=", ">=", ">"] {
        let err = FilterSet::validate(&[clause("position", op, "dev")]).unwrap_err();
        assert!(
            matches!(&err, Error::InvalidPositionOperator(o) if o == op),
            "operator {op}: {err}"
        );
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}

#[test]
fn non_digit_value_is_malformed_for_every_comparator() {
    for op in ["<", "<=", "=", "!=", ">=", ">"] {
        for value in ["abc", "3.5", "-1", "+2", " 3", "3 ", "1e3", ""] {
            let err = FilterSet::validate(&[clause("age", op, value)]).unwrap_err();
            assert!(
                matches!(err, Error::NonNumericFilterValue { key: "age", .. }),
                "op {op}, value {value:?}"
            );
        }
    }
}

#[test]
fn digit_value_beyond_i64_is_malformed() {
    let err = FilterSet::validate(&[clause("age", "<", "99999999999999999999")]).unwrap_err();
    assert!(matches!(err, Error::NonNumericFilterValue { .. }));
}

#[test]
fn any_invalid_clause_rejects_the_whole_request() {
    // All-or-nothing: three valid clauses do not save the fourth.
    let raw = vec![
        clause("age", ">=", "30"),
        clause("experience", "<", "10"),
        clause("position", "=", "dev"),
        clause("experience", "<", "ten"),
    ];
    assert!(FilterSet::validate(&raw).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Pass-through semantics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validation_preserves_order_and_values() {
    let raw = vec![
        clause("experience", ">=", "15"),
        clause("position", "!=", "QC engineer"),
        clause("age", "=", "0"),
    ];
    let set = FilterSet::validate(&raw).unwrap();
    assert_eq!(
        set.clauses(),
        &[
            FilterClause::Experience {
                op: OrderOp::Ge,
                bound: 15
            },
            FilterClause::Position {
                op: EqOp::Ne,
                value: "QC engineer".to_string()
            },
            FilterClause::Age {
                op: OrderOp::Eq,
                bound: 0
            },
        ]
    );
}

#[test]
fn duplicate_numeric_clauses_are_allowed() {
    // Only position clauses are exclusive; contradictory numeric clauses
    // validate and simply admit nothing.
    let raw = vec![clause("age", "<", "10"), clause("age", ">", "90")];
    assert!(FilterSet::validate(&raw).is_ok());
}

#[test]
fn all_six_comparators_parse_for_numeric_keys() {
    let expected = [
        OrderOp::Lt,
        OrderOp::Le,
        OrderOp::Eq,
        OrderOp::Ne,
        OrderOp::Ge,
        OrderOp::Gt,
    ];
    for (symbol, op) in ["<", "<=", "=", "!=", ">=", ">"].iter().zip(expected) {
        let set = FilterSet::validate(&[clause("age", symbol, "42")]).unwrap();
        assert_eq!(set.clauses(), &[FilterClause::Age { op, bound: 42 }]);
    }
}
