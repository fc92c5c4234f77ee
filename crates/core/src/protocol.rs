// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Wire protocol for client-server communication.
//!
//! Requests and responses are JSON objects, one per line over the TCP
//! connection. Responses carry a numeric status code mirroring the REST
//! conventions of the service: 200 success, 201 created, 400 malformed
//! input, 404 not found, 409 conflict, 500 internal fault.

use serde::{Deserialize, Serialize};

use crate::employee::{Employee, NewEmployee};
use crate::error::ErrorKind;
use crate::filter::RawClause;

/// Status code for a successful request.
pub const STATUS_OK: u16 = 200;
/// Status code for a successful creation.
pub const STATUS_CREATED: u16 = 201;
/// Status code for malformed input.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status code for an absent resource or zero-match filtered delete.
pub const STATUS_NOT_FOUND: u16 = 404;
/// Status code for a semantic conflict.
pub const STATUS_CONFLICT: u16 = 409;
/// Status code for an internal fault.
pub const STATUS_INTERNAL: u16 = 500;

impl ErrorKind {
    /// The wire status code for this error class.
    pub fn status(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => STATUS_BAD_REQUEST,
            ErrorKind::Conflict => STATUS_CONFLICT,
            ErrorKind::NotFound => STATUS_NOT_FOUND,
            ErrorKind::Internal => STATUS_INTERNAL,
        }
    }
}

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// List all employees in id order.
    ListEmployees,

    /// Get a single employee by id.
    GetEmployee {
        /// Store-assigned identifier.
        id: i64,
    },

    /// Create a new employee.
    ///
    /// Refused as a conflict when an employee with the same name and
    /// birthdate already exists.
    CreateEmployee { employee: NewEmployee },

    /// List the employees admitted by a filter set.
    FilterEmployees {
        /// 1-5 clauses, combined as a logical AND.
        filters: Vec<RawClause>,
    },

    /// Delete a single employee by id.
    DeleteEmployee {
        /// Store-assigned identifier.
        id: i64,
    },

    /// Delete all employees.
    DeleteAllEmployees,

    /// Delete the employees admitted by a filter set.
    DeleteFiltered {
        /// 1-5 clauses, combined as a logical AND.
        filters: Vec<RawClause>,
    },
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Zero or more employee records.
    Employees {
        /// Status code (200 for reads, even with zero matches).
        code: u16,
        /// Matching records in id order.
        employees: Vec<Employee>,
    },

    /// A single employee record.
    Employee {
        /// Status code (200 for reads and deletes, 201 for creation).
        code: u16,
        employee: Employee,
    },

    /// Result of a bulk delete.
    Deleted {
        /// Status code.
        code: u16,
        /// Number of removed records.
        count: usize,
    },

    /// Request failure.
    Error {
        /// Status code (400, 404, 409, or 500).
        code: u16,
        /// Human-readable error description.
        message: String,
    },
}

impl Request {
    /// Serializes the request to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a request from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl Response {
    /// Creates a success response with zero or more employees.
    pub fn employees(employees: Vec<Employee>) -> Self {
        Response::Employees {
            code: STATUS_OK,
            employees,
        }
    }

    /// Creates a success response with a single employee.
    pub fn employee(employee: Employee) -> Self {
        Response::Employee {
            code: STATUS_OK,
            employee,
        }
    }

    /// Creates a creation response.
    pub fn created(employee: Employee) -> Self {
        Response::Employee {
            code: STATUS_CREATED,
            employee,
        }
    }

    /// Creates a bulk-delete response.
    pub fn deleted(count: usize) -> Self {
        Response::Deleted {
            code: STATUS_OK,
            count,
        }
    }

    /// Creates an error response.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Response::Error {
            code,
            message: message.into(),
        }
    }

    /// The status code carried by this response.
    pub fn code(&self) -> u16 {
        match self {
            Response::Employees { code, .. }
            | Response::Employee { code, .. }
            | Response::Deleted { code, .. }
            | Response::Error { code, .. } => *code,
        }
    }

    /// Serializes the response to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a response from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
