// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! History log persistence.
//!
//! The log is append-only: this module exposes exactly one write, an
//! insert. Rows are removed only by the hard-delete mutations, together
//! with their aggregate.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use cotaq_audit::HistoryEntry;

use crate::diesel_schema::history_entries;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Appends one history entry for an aggregate.
///
/// The aggregate id is passed explicitly because the entry produced
/// inside a creation transaction predates the generated id.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `entry` - The history entry to append
/// * `aggregate_id` - The owning aggregate's id
///
/// # Returns
///
/// The history row id assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn append_history(
    conn: &mut SqliteConnection,
    entry: &HistoryEntry,
    aggregate_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(history_entries::table)
        .values((
            history_entries::aggregate_type.eq(entry.aggregate.as_str()),
            history_entries::aggregate_id.eq(aggregate_id),
            history_entries::actor_id.eq(&entry.actor.id),
            history_entries::actor_role.eq(entry.actor.role.as_str()),
            history_entries::action.eq(&entry.action),
            history_entries::previous_status.eq(entry.previous_status.as_deref()),
            history_entries::new_status.eq(&entry.new_status),
            history_entries::notes.eq(entry.notes.as_deref()),
            history_entries::recorded_at.eq(&entry.recorded_at),
        ))
        .execute(conn)?;

    let history_id: i64 = get_last_insert_rowid(conn)?;

    debug!(
        history_id,
        aggregate = entry.aggregate.as_str(),
        aggregate_id,
        action = entry.action.as_str(),
        "Appended history entry"
    );

    Ok(history_id)
}
