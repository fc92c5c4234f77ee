// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! SQLite-backed store for employee records.
//!
//! The [`Database`] struct provides all data access operations: insertion
//! with the `(name, birthdate)` uniqueness constraint, reads in stable id
//! order, and plain or filtered deletion.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::dates::parse_date;
use crate::employee::{Employee, NewEmployee};
use crate::error::{Error, Result};
use crate::filter::FilterSet;

/// SQL schema for the employee store.
///
/// The `(name, birthdate)` pair is unique at the storage level, so
/// duplicate inserts fail as a single constrained write rather than a
/// check-then-act sequence.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    birthdate TEXT NOT NULL,
    position TEXT NOT NULL,
    enrollmentdate TEXT NOT NULL,
    UNIQUE (name, birthdate)
);

CREATE INDEX IF NOT EXISTS idx_employees_position ON employees(position);
"#;

/// Parse a `DD.MM.YYYY` date from a stored column.
///
/// Stored rows were validated at insert time, so a parse failure here is a
/// data-integrity fault: it surfaces as [`Error::CorruptedData`] through
/// the row-mapping error, never as a silently skipped record.
fn parse_stored_date(value: &str, column: &str) -> std::result::Result<NaiveDate, rusqlite::Error> {
    parse_date(value).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid date '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Map a row from `SELECT id, name, birthdate, position, enrollmentdate`.
fn map_employee(row: &Row<'_>) -> std::result::Result<Employee, rusqlite::Error> {
    let birthdate: String = row.get(2)?;
    let enrollment_date: String = row.get(4)?;
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        birthdate: parse_stored_date(&birthdate, "birthdate")?,
        position: row.get(3)?,
        enrollment_date: parse_stored_date(&enrollment_date, "enrollmentdate")?,
    })
}

const SELECT_COLUMNS: &str = "id, name, birthdate, position, enrollmentdate";

/// SQLite database connection with employee store operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating the schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    /// Insert a new employee and return the stored record with its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEmployee`] when a record with the same
    /// `(name, birthdate)` already exists, and field-validation errors for
    /// out-of-range name or position lengths. On any error no row is
    /// written.
    pub fn insert_employee(&self, new: &NewEmployee) -> Result<Employee> {
        new.validate()?;

        let birthdate = crate::dates::format_date(new.birthdate);
        let enrollment_date = crate::dates::format_date(new.enrollment_date);

        let result = self.conn.execute(
            "INSERT INTO employees (name, birthdate, position, enrollmentdate)
             VALUES (?1, ?2, ?3, ?4)",
            params![new.name, birthdate, new.position, enrollment_date],
        );

        match result {
            Ok(_) => Ok(Employee {
                id: self.conn.last_insert_rowid(),
                name: new.name.clone(),
                birthdate: new.birthdate,
                position: new.position.clone(),
                enrollment_date: new.enrollment_date,
            }),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(Error::DuplicateEmployee {
                    name: new.name.clone(),
                    birthdate,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether an employee with this `(name, birthdate)` exists.
    pub fn employee_exists(&self, name: &str, birthdate: NaiveDate) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM employees WHERE name = ?1 AND birthdate = ?2",
            params![name, crate::dates::format_date(birthdate)],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// All employees, ordered by id ascending.
    pub fn all_employees(&self) -> Result<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SELECT_COLUMNS} FROM employees ORDER BY id"))?;
        let employees = stmt
            .query_map([], map_employee)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    /// Get a single employee by id, or `None` if absent.
    pub fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM employees WHERE id = ?1"),
                params![id],
                map_employee,
            )
            .optional()?;
        Ok(employee)
    }

    /// Delete a single employee by id, returning the removed record, or
    /// `None` if absent.
    pub fn delete_employee(&self, id: i64) -> Result<Option<Employee>> {
        let tx = self.conn.unchecked_transaction()?;
        let employee = tx
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM employees WHERE id = ?1"),
                params![id],
                map_employee,
            )
            .optional()?;
        if employee.is_some() {
            tx.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        }
        tx.commit()?;
        Ok(employee)
    }

    /// Delete all employees, returning the removed count.
    pub fn delete_all(&self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM employees", [])?;
        Ok(deleted)
    }

    /// Employees admitted by the filter set, ordered by id ascending.
    ///
    /// The predicate runs over a full scan of the id-ordered record set;
    /// the evaluation date is passed in so results are deterministic for a
    /// given date.
    pub fn filter_employees(&self, filters: &FilterSet, today: NaiveDate) -> Result<Vec<Employee>> {
        let mut admitted = self.all_employees()?;
        admitted.retain(|e| filters.matches(e, today));
        Ok(admitted)
    }

    /// Delete the employees admitted by the filter set, returning them.
    ///
    /// Selection and deletion run in a single transaction: the admitted
    /// subset is computed first, then exactly those ids are removed, so a
    /// concurrent writer cannot make the deleted set diverge from the
    /// selected one.
    pub fn delete_filtered(&self, filters: &FilterSet, today: NaiveDate) -> Result<Vec<Employee>> {
        let tx = self.conn.unchecked_transaction()?;

        let mut stmt = tx.prepare(&format!("SELECT {SELECT_COLUMNS} FROM employees ORDER BY id"))?;
        let mut admitted = stmt
            .query_map([], map_employee)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        drop(stmt);
        admitted.retain(|e| filters.matches(e, today));

        for employee in &admitted {
            tx.execute("DELETE FROM employees WHERE id = ?1", params![employee.id])?;
        }

        tx.commit()?;
        Ok(admitted)
    }

    /// Total number of stored employees.
    pub fn count_employees(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
