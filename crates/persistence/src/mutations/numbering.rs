// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sequence number allocation and the legacy backfill migration.
//!
//! Numbers come from an increment-and-fetch on `sequence_counters`,
//! executed inside the same transaction that inserts the aggregate. The
//! display peek lives in `queries::numbering` and never reserves; a
//! unique index on each `number` column backstops the invariant.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::diesel_schema::{pending_requests, quotations, sequence_counters};
use crate::error::PersistenceError;

/// Counter key for quotation numbers.
pub const QUOTATION_COUNTER: &str = "quotation";

/// Counter key for pending-registration request numbers.
pub const PENDING_COUNTER: &str = "pending_request";

/// Atomically increments the counter for an aggregate type and returns
/// the freshly assigned number.
///
/// Must be called inside the transaction that persists the aggregate;
/// this is the only source of truth for assigned numbers.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `kind` - The counter key (`quotation` or `pending_request`)
///
/// # Errors
///
/// Returns an error if the counter row is missing or the update fails.
pub fn allocate_number(conn: &mut SqliteConnection, kind: &str) -> Result<i64, PersistenceError> {
    let updated: usize = diesel::update(
        sequence_counters::table.filter(sequence_counters::aggregate_type.eq(kind)),
    )
    .set(sequence_counters::last_value.eq(sequence_counters::last_value + 1))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::CounterNotFound(kind.to_string()));
    }

    let value: i64 = sequence_counters::table
        .filter(sequence_counters::aggregate_type.eq(kind))
        .select(sequence_counters::last_value)
        .first(conn)?;

    debug!(kind, value, "Allocated sequence number");

    Ok(value)
}

/// Raises a counter so it can never re-issue a number a legacy row
/// already holds.
fn raise_counter_to(
    conn: &mut SqliteConnection,
    kind: &str,
    floor: i64,
) -> Result<(), PersistenceError> {
    let current: i64 = sequence_counters::table
        .filter(sequence_counters::aggregate_type.eq(kind))
        .select(sequence_counters::last_value)
        .first(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::CounterNotFound(kind.to_string()))?;

    if floor > current {
        diesel::update(sequence_counters::table.filter(sequence_counters::aggregate_type.eq(kind)))
            .set(sequence_counters::last_value.eq(floor))
            .execute(conn)?;
    }

    Ok(())
}

/// Assigns numbers to quotations that lack one.
///
/// Idempotent: rows that already carry a number are skipped, so a second
/// run migrates zero rows. The counter is first raised past any legacy
/// maximum so numbers are never reused.
///
/// # Returns
///
/// The count of rows migrated.
///
/// # Errors
///
/// Returns an error if any read or write fails; the whole backfill rolls
/// back in that case.
pub fn backfill_quotation_numbers(
    conn: &mut SqliteConnection,
) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let max_existing: Option<i64> = quotations::table
            .select(diesel::dsl::max(quotations::number))
            .first(conn)?;
        if let Some(floor) = max_existing {
            raise_counter_to(conn, QUOTATION_COUNTER, floor)?;
        }

        let missing: Vec<i64> = quotations::table
            .filter(quotations::number.is_null())
            .order((quotations::created_at.asc(), quotations::quotation_id.asc()))
            .select(quotations::quotation_id)
            .load(conn)?;

        for quotation_id in &missing {
            let number: i64 = allocate_number(conn, QUOTATION_COUNTER)?;
            diesel::update(quotations::table.filter(quotations::quotation_id.eq(quotation_id)))
                .set(quotations::number.eq(number))
                .execute(conn)?;
        }

        info!(migrated = missing.len(), "Backfilled quotation numbers");

        Ok(missing.len())
    })
}

/// Assigns numbers to pending-registration requests that lack one.
///
/// Same contract as [`backfill_quotation_numbers`].
///
/// # Returns
///
/// The count of rows migrated.
///
/// # Errors
///
/// Returns an error if any read or write fails; the whole backfill rolls
/// back in that case.
pub fn backfill_pending_numbers(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let max_existing: Option<i64> = pending_requests::table
            .select(diesel::dsl::max(pending_requests::number))
            .first(conn)?;
        if let Some(floor) = max_existing {
            raise_counter_to(conn, PENDING_COUNTER, floor)?;
        }

        let missing: Vec<i64> = pending_requests::table
            .filter(pending_requests::number.is_null())
            .order((
                pending_requests::created_at.asc(),
                pending_requests::request_id.asc(),
            ))
            .select(pending_requests::request_id)
            .load(conn)?;

        for request_id in &missing {
            let number: i64 = allocate_number(conn, PENDING_COUNTER)?;
            diesel::update(
                pending_requests::table.filter(pending_requests::request_id.eq(request_id)),
            )
            .set(pending_requests::number.eq(number))
            .execute(conn)?;
        }

        info!(
            migrated = missing.len(),
            "Backfilled pending-registration numbers"
        );

        Ok(missing.len())
    })
}
