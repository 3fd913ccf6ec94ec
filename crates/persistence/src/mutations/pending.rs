// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pending-registration request mutations.
//!
//! Structurally a smaller twin of the quotation mutations: creation
//! allocates a number from its own counter, transitions update the row
//! and append one history entry, all inside one transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use cotaq::{PendingCreationResult, PendingTransitionResult};
use cotaq_domain::PendingRequest;

use crate::data_models::document_to_json;
use crate::diesel_schema::{history_entries, pending_requests};
use crate::error::PersistenceError;
use crate::mutations::history::append_history;
use crate::mutations::numbering::{PENDING_COUNTER, allocate_number};
use crate::sqlite::get_last_insert_rowid;

/// The ids assigned inside a creation transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedPendingRequest {
    /// The canonical request id.
    pub request_id: i64,
    /// The allocated sequential number.
    pub number: i64,
}

/// Persists a new pending-registration request atomically.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `result` - The creation result produced by the core
///
/// # Returns
///
/// The ids assigned by the database and the allocator.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is committed in that
/// case.
pub fn create_pending_request(
    conn: &mut SqliteConnection,
    result: &PendingCreationResult,
) -> Result<CreatedPendingRequest, PersistenceError> {
    let request: &PendingRequest = &result.request;

    conn.transaction::<CreatedPendingRequest, PersistenceError, _>(|conn| {
        let number: i64 = allocate_number(conn, PENDING_COUNTER)?;
        let document_json: Option<String> = document_to_json(request.document.as_ref())?;

        diesel::insert_into(pending_requests::table)
            .values((
                pending_requests::number.eq(number),
                pending_requests::part_code.eq(&request.part_code),
                pending_requests::description.eq(&request.description),
                pending_requests::brand.eq(request.brand.as_deref()),
                pending_requests::notes.eq(request.notes.as_deref()),
                pending_requests::requester_id.eq(&request.requester_id),
                pending_requests::status.eq(request.status.as_str()),
                pending_requests::document_json.eq(document_json.as_deref()),
                pending_requests::handler_id.eq(request.handler_id.as_deref()),
                pending_requests::rejection_reason.eq(request.rejection_reason.as_deref()),
                pending_requests::catalog_part_ref.eq(request.catalog_part_ref.as_deref()),
                pending_requests::catalog_code.eq(request.catalog_code.as_deref()),
                pending_requests::cancelled.eq(i32::from(request.cancelled)),
                pending_requests::cancel_reason.eq(request.cancel_reason.as_deref()),
                pending_requests::created_at.eq(&request.created_at),
                pending_requests::updated_at.eq(&request.updated_at),
                pending_requests::assigned_at.eq(request.assigned_at.as_deref()),
                pending_requests::responded_at.eq(request.responded_at.as_deref()),
                pending_requests::concluded_at.eq(request.concluded_at.as_deref()),
            ))
            .execute(conn)?;

        let request_id: i64 = get_last_insert_rowid(conn)?;

        append_history(conn, &result.history_entry, request_id)?;

        info!(request_id, number, "Created pending-registration request");

        Ok(CreatedPendingRequest { request_id, number })
    })
}

/// Persists a pending-registration transition atomically.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `result` - The transition result produced by the core
///
/// # Returns
///
/// The history row id assigned by the database.
///
/// # Errors
///
/// Returns an error if the request was never persisted or any write
/// fails; nothing is committed in that case.
pub fn persist_pending_transition(
    conn: &mut SqliteConnection,
    result: &PendingTransitionResult,
) -> Result<i64, PersistenceError> {
    let request: &PendingRequest = &result.new_request;
    let request_id: i64 = request
        .request_id
        .ok_or_else(|| PersistenceError::Other(String::from("Cannot update an unsaved request")))?;

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let document_json: Option<String> = document_to_json(request.document.as_ref())?;

        let updated: usize = diesel::update(
            pending_requests::table.filter(pending_requests::request_id.eq(request_id)),
        )
        .set((
            pending_requests::part_code.eq(&request.part_code),
            pending_requests::description.eq(&request.description),
            pending_requests::brand.eq(request.brand.as_deref()),
            pending_requests::notes.eq(request.notes.as_deref()),
            pending_requests::status.eq(request.status.as_str()),
            pending_requests::document_json.eq(document_json.as_deref()),
            pending_requests::handler_id.eq(request.handler_id.as_deref()),
            pending_requests::rejection_reason.eq(request.rejection_reason.as_deref()),
            pending_requests::catalog_part_ref.eq(request.catalog_part_ref.as_deref()),
            pending_requests::catalog_code.eq(request.catalog_code.as_deref()),
            pending_requests::cancelled.eq(i32::from(request.cancelled)),
            pending_requests::cancel_reason.eq(request.cancel_reason.as_deref()),
            pending_requests::updated_at.eq(&request.updated_at),
            pending_requests::assigned_at.eq(request.assigned_at.as_deref()),
            pending_requests::responded_at.eq(request.responded_at.as_deref()),
            pending_requests::concluded_at.eq(request.concluded_at.as_deref()),
        ))
        .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::PendingRequestNotFound(request_id));
        }

        let history_id: i64 = append_history(conn, &result.history_entry, request_id)?;

        debug!(
            request_id,
            status = request.display_status(),
            "Persisted pending-registration transition"
        );

        Ok(history_id)
    })
}

/// Hard-deletes a pending-registration request and its history rows.
///
/// # Errors
///
/// Returns `PendingRequestNotFound` if no such request exists.
pub fn delete_pending_request(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        diesel::delete(
            history_entries::table
                .filter(history_entries::aggregate_type.eq("pending_request"))
                .filter(history_entries::aggregate_id.eq(request_id)),
        )
        .execute(conn)?;

        let deleted: usize = diesel::delete(
            pending_requests::table.filter(pending_requests::request_id.eq(request_id)),
        )
        .execute(conn)?;

        if deleted == 0 {
            return Err(PersistenceError::PendingRequestNotFound(request_id));
        }

        info!(request_id, "Deleted pending-registration request");

        Ok(())
    })
}
