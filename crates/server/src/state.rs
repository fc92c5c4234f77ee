// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! Server state management.
//!
//! Wraps the employee store for thread-safe access. Each request locks the
//! store for its own read/write sequence and releases it on every exit
//! path, including faults; there is no shared mutable connection outside
//! the guard.

use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use roster_core::{Database, Result};

/// Shared server state containing the employee store.
#[derive(Clone)]
pub struct ServerState {
    db: Arc<Mutex<Database>>,
}

impl ServerState {
    /// Creates server state with the database in the given directory.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let db = Database::open(&data_dir.join("roster.db"))?;
        Ok(ServerState {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Creates server state over an in-memory store (for testing).
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        Ok(ServerState {
            db: Arc::new(Mutex::new(Database::open_in_memory()?)),
        })
    }

    /// Acquire the store for the duration of one request.
    pub async fn db(&self) -> MutexGuard<'_, Database> {
        self.db.lock().await
    }
}
