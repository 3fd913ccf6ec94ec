// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! History timeline queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use cotaq_audit::{AggregateKind, HistoryEntry};

use crate::data_models::HistoryRow;
use crate::diesel_schema::history_entries;
use crate::error::PersistenceError;

/// Retrieves the history timeline for one aggregate, oldest first.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `aggregate` - The aggregate kind
/// * `aggregate_id` - The aggregate's id
///
/// # Errors
///
/// Returns an error if the query fails or stored values cannot be mapped
/// back.
pub fn history_for(
    conn: &mut SqliteConnection,
    aggregate: AggregateKind,
    aggregate_id: i64,
) -> Result<Vec<HistoryEntry>, PersistenceError> {
    let rows: Vec<HistoryRow> = history_entries::table
        .filter(history_entries::aggregate_type.eq(aggregate.as_str()))
        .filter(history_entries::aggregate_id.eq(aggregate_id))
        .order(history_entries::history_id.asc())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("history_for: {e}")))?;

    rows.into_iter().map(HistoryRow::into_entry).collect()
}

/// Counts all history rows for one aggregate.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn history_count(
    conn: &mut SqliteConnection,
    aggregate: AggregateKind,
    aggregate_id: i64,
) -> Result<i64, PersistenceError> {
    history_entries::table
        .filter(history_entries::aggregate_type.eq(aggregate.as_str()))
        .filter(history_entries::aggregate_id.eq(aggregate_id))
        .count()
        .get_result(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("history_count: {e}")))
}
