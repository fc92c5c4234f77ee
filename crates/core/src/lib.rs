// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! roster-core: Shared library for the roster employee-records service.
//!
//! This crate provides the employee data model, the filter mini-language
//! (validation and evaluation), the SQLite-backed store, and the wire
//! protocol used by the roster server.

pub mod dates;
pub mod db;
pub mod employee;
pub mod error;
pub mod filter;
pub mod protocol;

pub use db::Database;
pub use employee::{Employee, NewEmployee};
pub use error::{Error, ErrorKind, Result};
pub use filter::{EqOp, FilterClause, FilterKey, FilterSet, OrderOp, RawClause};
pub use protocol::{Request, Response};
