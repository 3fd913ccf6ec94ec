// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quotation read queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use cotaq_domain::{LineItem, Quotation, QuotationStatus};

use crate::data_models::{LineItemRow, QuotationRow};
use crate::diesel_schema::{line_items, quotations};
use crate::error::PersistenceError;

/// List filtering options for quotations.
///
/// All fields combine with AND; the free-text search matches the client
/// name, the sequential number, the external order number, and the item
/// part codes.
#[derive(Debug, Clone, Default)]
pub struct QuotationFilter {
    /// Restrict to one status.
    pub status: Option<QuotationStatus>,
    /// Restrict to quotations created by this requester.
    pub requester_id: Option<String>,
    /// Restrict to quotations assumed by this buyer.
    pub buyer_id: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Inclusive lower bound on `created_at` (ISO 8601).
    pub created_from: Option<String>,
    /// Inclusive upper bound on `created_at` (ISO 8601).
    pub created_to: Option<String>,
    /// Whether `comprada`/`cancelada` quotations are included.
    pub include_finalized: bool,
}

fn load_items_for(
    conn: &mut SqliteConnection,
    quotation_id: i64,
) -> Result<Vec<LineItem>, PersistenceError> {
    let rows: Vec<LineItemRow> = line_items::table
        .filter(line_items::quotation_id.eq(quotation_id))
        .order(line_items::item_id.asc())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("load_items_for: {e}")))?;

    rows.into_iter().map(LineItemRow::into_domain).collect()
}

/// Retrieves a quotation with its line items.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `quotation_id` - The quotation to retrieve
///
/// # Errors
///
/// Returns `QuotationNotFound` if no such quotation exists, or
/// `DataCorruption` if stored values cannot be mapped back.
pub fn get_quotation(
    conn: &mut SqliteConnection,
    quotation_id: i64,
) -> Result<Quotation, PersistenceError> {
    let row: QuotationRow = quotations::table
        .filter(quotations::quotation_id.eq(quotation_id))
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::QuotationNotFound(quotation_id))?;

    let items: Vec<LineItem> = load_items_for(conn, quotation_id)?;

    row.into_domain(items)
}

/// Lists quotations matching a filter, newest first, items attached.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `filter` - The filtering options
///
/// # Errors
///
/// Returns an error if a query fails or stored values cannot be mapped
/// back.
pub fn list_quotations(
    conn: &mut SqliteConnection,
    filter: &QuotationFilter,
) -> Result<Vec<Quotation>, PersistenceError> {
    let mut query = quotations::table.into_boxed::<diesel::sqlite::Sqlite>();

    if let Some(status) = filter.status {
        query = query.filter(quotations::status.eq(status.as_str()));
    }
    if !filter.include_finalized {
        query = query.filter(quotations::status.ne_all(vec![
            QuotationStatus::Comprada.as_str(),
            QuotationStatus::Cancelada.as_str(),
        ]));
    }
    if let Some(requester_id) = filter.requester_id.clone() {
        query = query.filter(quotations::requester_id.eq(requester_id));
    }
    if let Some(buyer_id) = filter.buyer_id.clone() {
        query = query.filter(quotations::buyer_id.eq(buyer_id));
    }
    if let Some(created_from) = filter.created_from.clone() {
        query = query.filter(quotations::created_at.ge(created_from));
    }
    if let Some(created_to) = filter.created_to.clone() {
        query = query.filter(quotations::created_at.le(created_to));
    }
    if let Some(search) = filter.search.as_deref() {
        let pattern: String = format!("%{search}%");

        // Quotations whose items match the part code; resolved first so
        // the main query stays a single-table filter
        let item_matches: Vec<i64> = line_items::table
            .filter(line_items::part_code.like(pattern.clone()))
            .select(line_items::quotation_id)
            .load(conn)
            .map_err(|e| PersistenceError::QueryFailed(format!("list_quotations: {e}")))?;

        // A numeric search term also matches the sequential number; no
        // quotation ever holds a negative number, so -1 matches nothing
        let number_search: i64 = search.trim().parse().unwrap_or(-1);

        // NULL columns drop out of the OR chain as SQL intends; the
        // assume_not_null casts only normalize the expression types
        query = query.filter(
            quotations::client_name
                .like(pattern.clone())
                .or(quotations::order_number.assume_not_null().like(pattern))
                .or(quotations::quotation_id.eq_any(item_matches))
                .or(quotations::number.assume_not_null().eq(number_search)),
        );
    }

    let rows: Vec<QuotationRow> = query
        .order((quotations::created_at.desc(), quotations::quotation_id.desc()))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_quotations: {e}")))?;

    let mut result: Vec<Quotation> = Vec::with_capacity(rows.len());
    for row in rows {
        let items: Vec<LineItem> = load_items_for(conn, row.quotation_id)?;
        result.push(row.into_domain(items)?);
    }

    Ok(result)
}
