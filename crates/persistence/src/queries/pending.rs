// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pending-registration request read queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use cotaq_domain::{PendingRequest, PendingStatus};

use crate::data_models::PendingRequestRow;
use crate::diesel_schema::pending_requests;
use crate::error::PersistenceError;

/// List filtering options for pending-registration requests.
#[derive(Debug, Clone, Default)]
pub struct PendingFilter {
    /// Restrict to one underlying status.
    pub status: Option<PendingStatus>,
    /// Restrict to requests created by this requester. Non-procurement
    /// callers are always scoped to their own requests.
    pub requester_id: Option<String>,
}

/// Retrieves a pending-registration request.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `request_id` - The request to retrieve
///
/// # Errors
///
/// Returns `PendingRequestNotFound` if no such request exists, or
/// `DataCorruption` if stored values cannot be mapped back.
pub fn get_pending_request(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<PendingRequest, PersistenceError> {
    let row: PendingRequestRow = pending_requests::table
        .filter(pending_requests::request_id.eq(request_id))
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::PendingRequestNotFound(request_id))?;

    row.into_domain()
}

/// Lists pending-registration requests matching a filter, newest first.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `filter` - The filtering options
///
/// # Errors
///
/// Returns an error if the query fails or stored values cannot be mapped
/// back.
pub fn list_pending_requests(
    conn: &mut SqliteConnection,
    filter: &PendingFilter,
) -> Result<Vec<PendingRequest>, PersistenceError> {
    let mut query = pending_requests::table.into_boxed::<diesel::sqlite::Sqlite>();

    if let Some(status) = filter.status {
        query = query.filter(pending_requests::status.eq(status.as_str()));
    }
    if let Some(requester_id) = filter.requester_id.clone() {
        query = query.filter(pending_requests::requester_id.eq(requester_id));
    }

    let rows: Vec<PendingRequestRow> = query
        .order((
            pending_requests::created_at.desc(),
            pending_requests::request_id.desc(),
        ))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_pending_requests: {e}")))?;

    rows.into_iter().map(PendingRequestRow::into_domain).collect()
}
