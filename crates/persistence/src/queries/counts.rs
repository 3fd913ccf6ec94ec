// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-status counts with ownership scoping.
//!
//! Mirrors the authorizer's ownership pattern: procurement roles see the
//! whole board, everyone else only their own requests. The caller picks
//! the scope; these queries just honor it.

use std::collections::BTreeMap;

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::{pending_requests, quotations};
use crate::error::PersistenceError;

/// Ownership scope for counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountScope {
    /// Count every aggregate.
    All,
    /// Count only aggregates created by this requester.
    Own(String),
}

/// Counts quotations per status.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `scope` - The ownership scope
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn quotation_status_counts(
    conn: &mut SqliteConnection,
    scope: &CountScope,
) -> Result<BTreeMap<String, i64>, PersistenceError> {
    let mut query = quotations::table
        .select(quotations::status)
        .into_boxed::<diesel::sqlite::Sqlite>();
    if let CountScope::Own(requester_id) = scope {
        query = query.filter(quotations::requester_id.eq(requester_id.clone()));
    }

    let statuses: Vec<String> = query
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("quotation_status_counts: {e}")))?;

    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for status in statuses {
        *counts.entry(status).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Counts pending-registration requests per displayed status.
///
/// The cancellation overlay wins: a cancelled request counts under
/// `cancelled`, whatever its underlying status holds.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `scope` - The ownership scope
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn pending_status_counts(
    conn: &mut SqliteConnection,
    scope: &CountScope,
) -> Result<BTreeMap<String, i64>, PersistenceError> {
    let mut query = pending_requests::table
        .select((pending_requests::status, pending_requests::cancelled))
        .into_boxed::<diesel::sqlite::Sqlite>();
    if let CountScope::Own(requester_id) = scope {
        query = query.filter(pending_requests::requester_id.eq(requester_id.clone()));
    }

    let rows: Vec<(String, i32)> = query
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("pending_status_counts: {e}")))?;

    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for (status, cancelled) in rows {
        let key: String = if cancelled == 0 {
            status
        } else {
            String::from("cancelled")
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    Ok(counts)
}
