// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Cotaq quotation system.
//!
//! This crate persists quotations, pending-registration requests, the
//! shared append-only history log, and the sequence counters. It is built
//! on Diesel over `SQLite`.
//!
//! ## Atomicity
//!
//! Every mutating entry point is one transaction touching exactly one
//! aggregate: the aggregate row, its line items, and one new history row
//! commit together or not at all. Sequence numbers are allocated inside
//! the creation transaction; the display peek never reserves.
//!
//! ## Testing
//!
//! Standard tests run against unique in-memory `SQLite` databases, named
//! via an atomic counter for deterministic isolation.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use cotaq::{CreationResult, PendingCreationResult, PendingTransitionResult, TransitionResult};
use cotaq_audit::{AggregateKind, HistoryEntry};
use cotaq_domain::{PendingRequest, Quotation};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::pending::CreatedPendingRequest;
pub use mutations::quotations::CreatedQuotation;
pub use mutations::{PENDING_COUNTER, QUOTATION_COUNTER};
pub use queries::{CountScope, PendingFilter, QuotationFilter};

/// Persistence adapter for the quotation system.
///
/// Wraps one `SQLite` connection; backend selection happens at
/// construction time and is transparent to callers.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via an atomic
    /// counter, ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_cotaq_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL for better read concurrency on file databases
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure the cascade from a
    /// quotation to its line items is enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Quotations
    // ========================================================================

    /// Persists a new quotation with its items and creation history entry.
    ///
    /// Allocates the sequential number inside the same transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is committed.
    pub fn create_quotation(
        &mut self,
        result: &CreationResult,
    ) -> Result<CreatedQuotation, PersistenceError> {
        mutations::quotations::create_quotation(&mut self.conn, result)
    }

    /// Persists a quotation transition (row update, item sync, one
    /// history entry).
    ///
    /// # Returns
    ///
    /// The history row id assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is committed.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        mutations::quotations::persist_transition(&mut self.conn, result)
    }

    /// Retrieves a quotation with its line items.
    ///
    /// # Errors
    ///
    /// Returns `QuotationNotFound` if no such quotation exists.
    pub fn get_quotation(&mut self, quotation_id: i64) -> Result<Quotation, PersistenceError> {
        queries::quotations::get_quotation(&mut self.conn, quotation_id)
    }

    /// Lists quotations matching a filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn list_quotations(
        &mut self,
        filter: &QuotationFilter,
    ) -> Result<Vec<Quotation>, PersistenceError> {
        queries::quotations::list_quotations(&mut self.conn, filter)
    }

    /// Hard-deletes a quotation, its line items, and its history rows.
    ///
    /// # Errors
    ///
    /// Returns `QuotationNotFound` if no such quotation exists.
    pub fn delete_quotation(&mut self, quotation_id: i64) -> Result<(), PersistenceError> {
        mutations::quotations::delete_quotation(&mut self.conn, quotation_id)
    }

    /// Counts quotations per status within a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn quotation_status_counts(
        &mut self,
        scope: &CountScope,
    ) -> Result<BTreeMap<String, i64>, PersistenceError> {
        queries::counts::quotation_status_counts(&mut self.conn, scope)
    }

    // ========================================================================
    // Pending-registration requests
    // ========================================================================

    /// Persists a new pending-registration request with its creation
    /// history entry.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is committed.
    pub fn create_pending_request(
        &mut self,
        result: &PendingCreationResult,
    ) -> Result<CreatedPendingRequest, PersistenceError> {
        mutations::pending::create_pending_request(&mut self.conn, result)
    }

    /// Persists a pending-registration transition.
    ///
    /// # Returns
    ///
    /// The history row id assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is committed.
    pub fn persist_pending_transition(
        &mut self,
        result: &PendingTransitionResult,
    ) -> Result<i64, PersistenceError> {
        mutations::pending::persist_pending_transition(&mut self.conn, result)
    }

    /// Retrieves a pending-registration request.
    ///
    /// # Errors
    ///
    /// Returns `PendingRequestNotFound` if no such request exists.
    pub fn get_pending_request(
        &mut self,
        request_id: i64,
    ) -> Result<PendingRequest, PersistenceError> {
        queries::pending::get_pending_request(&mut self.conn, request_id)
    }

    /// Lists pending-registration requests matching a filter, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_pending_requests(
        &mut self,
        filter: &PendingFilter,
    ) -> Result<Vec<PendingRequest>, PersistenceError> {
        queries::pending::list_pending_requests(&mut self.conn, filter)
    }

    /// Hard-deletes a pending-registration request and its history rows.
    ///
    /// # Errors
    ///
    /// Returns `PendingRequestNotFound` if no such request exists.
    pub fn delete_pending_request(&mut self, request_id: i64) -> Result<(), PersistenceError> {
        mutations::pending::delete_pending_request(&mut self.conn, request_id)
    }

    /// Counts pending-registration requests per displayed status within a
    /// scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn pending_status_counts(
        &mut self,
        scope: &CountScope,
    ) -> Result<BTreeMap<String, i64>, PersistenceError> {
        queries::counts::pending_status_counts(&mut self.conn, scope)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Retrieves the history timeline for one aggregate, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn history_for(
        &mut self,
        aggregate: AggregateKind,
        aggregate_id: i64,
    ) -> Result<Vec<HistoryEntry>, PersistenceError> {
        queries::history::history_for(&mut self.conn, aggregate, aggregate_id)
    }

    /// Counts all history rows for one aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn history_count(
        &mut self,
        aggregate: AggregateKind,
        aggregate_id: i64,
    ) -> Result<i64, PersistenceError> {
        queries::history::history_count(&mut self.conn, aggregate, aggregate_id)
    }

    // ========================================================================
    // Numbering
    // ========================================================================

    /// Reads the number the next allocation would assign, without
    /// reserving it.
    ///
    /// Display-only: two peeks may race and show the same value.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter row is missing.
    pub fn peek_next_number(&mut self, kind: &str) -> Result<i64, PersistenceError> {
        queries::numbering::peek_next_number(&mut self.conn, kind)
    }

    /// Assigns numbers to quotations that lack one. Idempotent.
    ///
    /// # Returns
    ///
    /// The count of rows migrated.
    ///
    /// # Errors
    ///
    /// Returns an error if the backfill fails; nothing is committed.
    pub fn backfill_quotation_numbers(&mut self) -> Result<usize, PersistenceError> {
        mutations::numbering::backfill_quotation_numbers(&mut self.conn)
    }

    /// Assigns numbers to pending-registration requests that lack one.
    /// Idempotent.
    ///
    /// # Returns
    ///
    /// The count of rows migrated.
    ///
    /// # Errors
    ///
    /// Returns an error if the backfill fails; nothing is committed.
    pub fn backfill_pending_numbers(&mut self) -> Result<usize, PersistenceError> {
        mutations::numbering::backfill_pending_numbers(&mut self.conn)
    }
}
