// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

#![allow(clippy::unwrap_used)]

use super::*;
use crate::employee::Employee;
use crate::filter::FilterSet;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn employee(name: &str, birth: NaiveDate, position: &str, enrolled: NaiveDate) -> Employee {
    Employee {
        id: 1,
        name: name.to_string(),
        birthdate: birth,
        position: position.to_string(),
        enrollment_date: enrolled,
    }
}

fn today() -> NaiveDate {
    date(2024, 6, 15)
}

// ─────────────────────────────────────────────────────────────────────────────
// Position clauses
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn position_equals_admits_exact_match() {
    let e = employee("Ada", date(1998, 12, 7), "QC engineer", date(2015, 6, 1));
    let clause = FilterClause::Position {
        op: EqOp::Eq,
        value: "QC engineer".to_string(),
    };
    assert!(clause.matches(&e, today()));
}

#[test]
fn position_not_equals_rejects_exact_match() {
    let e = employee("Ada", date(1998, 12, 7), "QC engineer", date(2015, 6, 1));
    let clause = FilterClause::Position {
        op: EqOp::Ne,
        value: "QC engineer".to_string(),
    };
    assert!(!clause.matches(&e, today()));
}

#[test]
fn position_comparison_is_case_sensitive() {
    let e = employee("Ada", date(1998, 12, 7), "QC engineer", date(2015, 6, 1));
    let clause = FilterClause::Position {
        op: EqOp::Eq,
        value: "qc engineer".to_string(),
    };
    assert!(!clause.matches(&e, today()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric clauses: derived age and tenure
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn age_clause_uses_birthday_adjustment() {
    // Age on 2024-01-01 for birthdate 07.12.1998 is 25, not 26.
    let e = employee("Ada", date(1998, 12, 7), "dev", date(2015, 6, 1));
    let on = date(2024, 1, 1);

    let eq25 = FilterClause::Age {
        op: OrderOp::Eq,
        bound: 25,
    };
    let eq26 = FilterClause::Age {
        op: OrderOp::Eq,
        bound: 26,
    };
    assert!(eq25.matches(&e, on));
    assert!(!eq26.matches(&e, on));
    assert!(eq26.matches(&e, date(2024, 12, 10)));
}

#[test]
fn experience_clause_uses_enrollment_date() {
    let e = employee("Ada", date(1998, 12, 7), "dev", date(2009, 6, 1));
    let clause = FilterClause::Experience {
        op: OrderOp::Ge,
        bound: 15,
    };
    assert!(clause.matches(&e, today()));
    assert!(!clause.matches(&e, date(2024, 5, 31)));
}

#[test]
fn each_ordering_comparator_behaves_at_the_boundary() {
    // Tenure is exactly 10 on today().
    let e = employee("Ada", date(1990, 1, 1), "dev", date(2014, 6, 15));
    let cases = [
        (OrderOp::Lt, 10, false),
        (OrderOp::Lt, 11, true),
        (OrderOp::Le, 10, true),
        (OrderOp::Le, 9, false),
        (OrderOp::Eq, 10, true),
        (OrderOp::Eq, 9, false),
        (OrderOp::Ne, 10, false),
        (OrderOp::Ne, 9, true),
        (OrderOp::Ge, 10, true),
        (OrderOp::Ge, 11, false),
        (OrderOp::Gt, 10, false),
        (OrderOp::Gt, 9, true),
    ];
    for (op, bound, expected) in cases {
        let clause = FilterClause::Experience { op, bound };
        assert_eq!(clause.matches(&e, today()), expected, "{op:?} {bound}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Set evaluation: AND with short-circuit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn set_admits_only_when_every_clause_matches() {
    let e = employee("Ada", date(1998, 12, 7), "dev", date(2009, 6, 1));
    let set = FilterSet::validate(&[
        raw("age", ">=", "25"),
        raw("experience", ">=", "15"),
        raw("position", "=", "dev"),
    ])
    .unwrap();
    assert!(set.matches(&e, today()));
}

#[test]
fn set_rejects_when_any_clause_fails() {
    let e = employee("Ada", date(1998, 12, 7), "dev", date(2009, 6, 1));
    let set = FilterSet::validate(&[
        raw("age", ">=", "25"),
        raw("position", "=", "manager"),
    ])
    .unwrap();
    assert!(!set.matches(&e, today()));
}

#[test]
fn contradictory_numeric_clauses_admit_nothing() {
    let e = employee("Ada", date(1998, 12, 7), "dev", date(2009, 6, 1));
    let set = FilterSet::validate(&[raw("age", "<", "10"), raw("age", ">", "90")]).unwrap();
    assert!(!set.matches(&e, today()));
}

fn raw(key: &str, expr: &str, value: &str) -> crate::filter::RawClause {
    crate::filter::RawClause {
        key: key.to_string(),
        expr: expr.to_string(),
        value: value.to_string(),
    }
}
