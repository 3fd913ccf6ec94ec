// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quotation and line item mutations.
//!
//! Creation allocates the sequential number, inserts the aggregate, its
//! items, and the creation history row in one transaction. Transitions
//! update the row, sync the item set, and append exactly one history row,
//! also in one transaction. No observer ever sees a status flip without
//! its history entry or a half-updated item set.

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::cast::ToPrimitive;
use tracing::{debug, info};

use cotaq::{CreationResult, TransitionResult};
use cotaq_domain::{LineItem, Quotation};

use crate::data_models::document_to_json;
use crate::diesel_schema::{history_entries, line_items, quotations};
use crate::error::PersistenceError;
use crate::mutations::history::append_history;
use crate::mutations::numbering::{QUOTATION_COUNTER, allocate_number};
use crate::sqlite::get_last_insert_rowid;

/// The ids assigned inside a creation transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedQuotation {
    /// The canonical quotation id.
    pub quotation_id: i64,
    /// The allocated sequential number.
    pub number: i64,
}

fn quantity_column(item: &LineItem) -> Result<i32, PersistenceError> {
    item.quantity.to_i32().ok_or_else(|| {
        PersistenceError::Other(format!("Quantity {} out of range", item.quantity))
    })
}

fn insert_line_item(
    conn: &mut SqliteConnection,
    quotation_id: i64,
    item: &LineItem,
) -> Result<i64, PersistenceError> {
    let quantity: i32 = quantity_column(item)?;

    diesel::insert_into(line_items::table)
        .values((
            line_items::quotation_id.eq(quotation_id),
            line_items::part_code.eq(&item.part_code),
            line_items::description.eq(&item.description),
            line_items::quantity.eq(quantity),
            line_items::unit_price_cents.eq(item.unit_price_cents),
            line_items::total_price_cents.eq(item.total_price_cents),
            line_items::lead_time.eq(item.lead_time.as_deref()),
            line_items::supplier.eq(item.supplier.as_deref()),
            line_items::notes.eq(item.notes.as_deref()),
            line_items::needs_registration.eq(i32::from(item.needs_registration)),
            line_items::catalog_code.eq(item.catalog_code.as_deref()),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

fn update_line_item(conn: &mut SqliteConnection, item: &LineItem) -> Result<(), PersistenceError> {
    let item_id: i64 = item
        .item_id
        .ok_or_else(|| PersistenceError::Other(String::from("Cannot update an unsaved item")))?;
    let quantity: i32 = quantity_column(item)?;

    diesel::update(line_items::table.filter(line_items::item_id.eq(item_id)))
        .set((
            line_items::part_code.eq(&item.part_code),
            line_items::description.eq(&item.description),
            line_items::quantity.eq(quantity),
            line_items::unit_price_cents.eq(item.unit_price_cents),
            line_items::total_price_cents.eq(item.total_price_cents),
            line_items::lead_time.eq(item.lead_time.as_deref()),
            line_items::supplier.eq(item.supplier.as_deref()),
            line_items::notes.eq(item.notes.as_deref()),
            line_items::needs_registration.eq(i32::from(item.needs_registration)),
            line_items::catalog_code.eq(item.catalog_code.as_deref()),
        ))
        .execute(conn)?;

    Ok(())
}

/// Replaces the persisted item set with the aggregate's current one.
///
/// Rows whose ids are no longer present were removed by an edit; items
/// without an id are fresh inserts.
fn sync_line_items(
    conn: &mut SqliteConnection,
    quotation_id: i64,
    items: &[LineItem],
) -> Result<(), PersistenceError> {
    let kept_ids: Vec<i64> = items.iter().filter_map(|item| item.item_id).collect();

    diesel::delete(
        line_items::table
            .filter(line_items::quotation_id.eq(quotation_id))
            .filter(line_items::item_id.ne_all(&kept_ids)),
    )
    .execute(conn)?;

    for item in items {
        if item.item_id.is_some() {
            update_line_item(conn, item)?;
        } else {
            insert_line_item(conn, quotation_id, item)?;
        }
    }

    Ok(())
}

/// Persists a new quotation: number allocation, aggregate row, line
/// items, and the creation history entry, atomically.
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
pub fn create_quotation(
    conn: &mut SqliteConnection,
    result: &CreationResult,
) -> Result<CreatedQuotation, PersistenceError> {
    let quotation: &Quotation = &result.quotation;

    conn.transaction::<CreatedQuotation, PersistenceError, _>(|conn| {
        // The only place a number is ever assigned
        let number: i64 = allocate_number(conn, QUOTATION_COUNTER)?;

        let quote_document_json: Option<String> =
            document_to_json(quotation.quote_document.as_ref())?;
        let proposal_document_json: Option<String> =
            document_to_json(quotation.proposal_document.as_ref())?;

        diesel::insert_into(quotations::table)
            .values((
                quotations::number.eq(number),
                quotations::order_number.eq(quotation.order_number.as_deref()),
                quotations::budget_number.eq(quotation.budget_number.as_deref()),
                quotations::client_name.eq(&quotation.client_name),
                quotations::requester_id.eq(&quotation.requester_id),
                quotations::buyer_id.eq(quotation.buyer_id.as_deref()),
                quotations::preferred_supplier.eq(quotation.preferred_supplier.as_deref()),
                quotations::request_type.eq(quotation.request_type.as_str()),
                quotations::status.eq(quotation.status.as_str()),
                quotations::cancel_reason.eq(quotation.cancel_reason.as_deref()),
                quotations::notes.eq(quotation.notes.as_deref()),
                quotations::quote_document_json.eq(quote_document_json.as_deref()),
                quotations::proposal_document_json.eq(proposal_document_json.as_deref()),
                quotations::created_at.eq(&quotation.created_at),
                quotations::updated_at.eq(&quotation.updated_at),
                quotations::responded_at.eq(quotation.responded_at.as_deref()),
                quotations::approved_at.eq(quotation.approved_at.as_deref()),
                quotations::purchased_at.eq(quotation.purchased_at.as_deref()),
                quotations::cancelled_at.eq(quotation.cancelled_at.as_deref()),
            ))
            .execute(conn)?;

        let quotation_id: i64 = get_last_insert_rowid(conn)?;

        for item in &quotation.items {
            insert_line_item(conn, quotation_id, item)?;
        }

        append_history(conn, &result.history_entry, quotation_id)?;

        info!(quotation_id, number, "Created quotation");

        Ok(CreatedQuotation {
            quotation_id,
            number,
        })
    })
}

/// Persists a quotation transition: row update, item sync, and exactly
/// one appended history entry, atomically.
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
/// Returns an error if the quotation was never persisted or any write
/// fails; nothing is committed in that case.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    let quotation: &Quotation = &result.new_quotation;
    let quotation_id: i64 = quotation
        .quotation_id
        .ok_or_else(|| PersistenceError::Other(String::from("Cannot update an unsaved quotation")))?;

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let quote_document_json: Option<String> =
            document_to_json(quotation.quote_document.as_ref())?;
        let proposal_document_json: Option<String> =
            document_to_json(quotation.proposal_document.as_ref())?;

        let updated: usize =
            diesel::update(quotations::table.filter(quotations::quotation_id.eq(quotation_id)))
                .set((
                    quotations::order_number.eq(quotation.order_number.as_deref()),
                    quotations::budget_number.eq(quotation.budget_number.as_deref()),
                    quotations::client_name.eq(&quotation.client_name),
                    quotations::buyer_id.eq(quotation.buyer_id.as_deref()),
                    quotations::preferred_supplier.eq(quotation.preferred_supplier.as_deref()),
                    quotations::request_type.eq(quotation.request_type.as_str()),
                    quotations::status.eq(quotation.status.as_str()),
                    quotations::cancel_reason.eq(quotation.cancel_reason.as_deref()),
                    quotations::notes.eq(quotation.notes.as_deref()),
                    quotations::quote_document_json.eq(quote_document_json.as_deref()),
                    quotations::proposal_document_json.eq(proposal_document_json.as_deref()),
                    quotations::updated_at.eq(&quotation.updated_at),
                    quotations::responded_at.eq(quotation.responded_at.as_deref()),
                    quotations::approved_at.eq(quotation.approved_at.as_deref()),
                    quotations::purchased_at.eq(quotation.purchased_at.as_deref()),
                    quotations::cancelled_at.eq(quotation.cancelled_at.as_deref()),
                ))
                .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::QuotationNotFound(quotation_id));
        }

        sync_line_items(conn, quotation_id, &quotation.items)?;

        let history_id: i64 = append_history(conn, &result.history_entry, quotation_id)?;

        debug!(
            quotation_id,
            status = quotation.status.as_str(),
            "Persisted quotation transition"
        );

        Ok(history_id)
    })
}

/// Hard-deletes a quotation, its line items, and its history rows.
///
/// Irreversible, in contrast with cancellation, which is soft and
/// auditable. Line items go via the foreign-key cascade; history rows are
/// removed explicitly in the same transaction.
///
/// # Errors
///
/// Returns `QuotationNotFound` if no such quotation exists.
pub fn delete_quotation(
    conn: &mut SqliteConnection,
    quotation_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        diesel::delete(
            history_entries::table
                .filter(history_entries::aggregate_type.eq("quotation"))
                .filter(history_entries::aggregate_id.eq(quotation_id)),
        )
        .execute(conn)?;

        let deleted: usize =
            diesel::delete(quotations::table.filter(quotations::quotation_id.eq(quotation_id)))
                .execute(conn)?;

        if deleted == 0 {
            return Err(PersistenceError::QuotationNotFound(quotation_id));
        }

        info!(quotation_id, "Deleted quotation");

        Ok(())
    })
}
