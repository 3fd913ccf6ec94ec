// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The non-reserving number peek.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::sequence_counters;
use crate::error::PersistenceError;

/// Reads the number the next allocation would assign, for display before
/// submission.
///
/// This MUST NOT reserve anything: two peeks may race and show the same
/// value, and only the allocation inside the creation transaction is
/// authoritative.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `kind` - The counter key (`quotation` or `pending_request`)
///
/// # Errors
///
/// Returns an error if the counter row is missing or the query fails.
pub fn peek_next_number(conn: &mut SqliteConnection, kind: &str) -> Result<i64, PersistenceError> {
    let last_value: i64 = sequence_counters::table
        .filter(sequence_counters::aggregate_type.eq(kind))
        .select(sequence_counters::last_value)
        .first(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::CounterNotFound(kind.to_string()))?;

    Ok(last_value + 1)
}
