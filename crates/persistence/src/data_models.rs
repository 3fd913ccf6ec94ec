// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row models and their mappings back into domain types.
//!
//! Stored status/role strings are parsed through the domain's closed
//! enumerations on the way out; an unknown value is surfaced as
//! `DataCorruption` rather than silently passed through.

use std::str::FromStr;

use diesel::prelude::*;
use num_traits::cast::ToPrimitive;
use serde::{Deserialize, Serialize};

use cotaq_audit::{Actor, AggregateKind, HistoryEntry};
use cotaq_domain::{
    DocumentRef, LineItem, PendingRequest, PendingStatus, Quotation, QuotationStatus, RequestType,
    Role,
};

use crate::error::PersistenceError;

/// JSON shape for a stored document reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentData {
    pub storage_ref: String,
    pub display_name: String,
}

/// Serializes an optional document reference to its JSON column value.
pub fn document_to_json(document: Option<&DocumentRef>) -> Result<Option<String>, PersistenceError> {
    document
        .map(|doc| {
            let data: DocumentData = DocumentData {
                storage_ref: doc.storage_ref.clone(),
                display_name: doc.display_name.clone(),
            };
            serde_json::to_string(&data).map_err(PersistenceError::from)
        })
        .transpose()
}

/// Deserializes an optional JSON column value into a document reference.
pub fn document_from_json(json: Option<&str>) -> Result<Option<DocumentRef>, PersistenceError> {
    json.map(|value| {
        let data: DocumentData = serde_json::from_str(value)?;
        Ok(DocumentRef::new(data.storage_ref, data.display_name))
    })
    .transpose()
}

/// A quotation row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct QuotationRow {
    pub quotation_id: i64,
    pub number: Option<i64>,
    pub order_number: Option<String>,
    pub budget_number: Option<String>,
    pub client_name: String,
    pub requester_id: String,
    pub buyer_id: Option<String>,
    pub preferred_supplier: Option<String>,
    pub request_type: String,
    pub status: String,
    pub cancel_reason: Option<String>,
    pub notes: Option<String>,
    pub quote_document_json: Option<String>,
    pub proposal_document_json: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub responded_at: Option<String>,
    pub approved_at: Option<String>,
    pub purchased_at: Option<String>,
    pub cancelled_at: Option<String>,
}

impl QuotationRow {
    /// Maps this row plus its loaded line items into a domain quotation.
    ///
    /// # Errors
    ///
    /// Returns `DataCorruption` if a stored status or request type string
    /// is not recognized, or a document JSON column cannot be parsed.
    pub fn into_domain(self, items: Vec<LineItem>) -> Result<Quotation, PersistenceError> {
        let status: QuotationStatus = QuotationStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::DataCorruption(e.to_string()))?;
        let request_type: RequestType = RequestType::parse(&self.request_type)
            .map_err(|e| PersistenceError::DataCorruption(e.to_string()))?;

        Ok(Quotation {
            quotation_id: Some(self.quotation_id),
            number: self.number,
            order_number: self.order_number,
            budget_number: self.budget_number,
            client_name: self.client_name,
            requester_id: self.requester_id,
            buyer_id: self.buyer_id,
            preferred_supplier: self.preferred_supplier,
            request_type,
            status,
            cancel_reason: self.cancel_reason,
            notes: self.notes,
            quote_document: document_from_json(self.quote_document_json.as_deref())?,
            proposal_document: document_from_json(self.proposal_document_json.as_deref())?,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
            responded_at: self.responded_at,
            approved_at: self.approved_at,
            purchased_at: self.purchased_at,
            cancelled_at: self.cancelled_at,
        })
    }
}

/// A line item row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct LineItemRow {
    pub item_id: i64,
    pub quotation_id: i64,
    pub part_code: String,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: Option<i64>,
    pub total_price_cents: Option<i64>,
    pub lead_time: Option<String>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub needs_registration: i32,
    pub catalog_code: Option<String>,
}

impl LineItemRow {
    /// Maps this row into a domain line item.
    ///
    /// # Errors
    ///
    /// Returns `DataCorruption` if the stored quantity is out of range.
    pub fn into_domain(self) -> Result<LineItem, PersistenceError> {
        let quantity: u32 = self.quantity.to_u32().ok_or_else(|| {
            PersistenceError::DataCorruption(format!(
                "Line item {} has invalid quantity {}",
                self.item_id, self.quantity
            ))
        })?;

        Ok(LineItem {
            item_id: Some(self.item_id),
            part_code: self.part_code,
            description: self.description,
            quantity,
            unit_price_cents: self.unit_price_cents,
            total_price_cents: self.total_price_cents,
            lead_time: self.lead_time,
            supplier: self.supplier,
            notes: self.notes,
            needs_registration: self.needs_registration != 0,
            catalog_code: self.catalog_code,
        })
    }
}

/// A history row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct HistoryRow {
    pub history_id: i64,
    pub aggregate_type: String,
    pub aggregate_id: i64,
    pub actor_id: String,
    pub actor_role: String,
    pub action: String,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub notes: Option<String>,
    pub recorded_at: String,
}

impl HistoryRow {
    /// Maps this row into an audit history entry.
    ///
    /// # Errors
    ///
    /// Returns `DataCorruption` if the stored aggregate type or role is not
    /// recognized.
    pub fn into_entry(self) -> Result<HistoryEntry, PersistenceError> {
        let aggregate: AggregateKind = match self.aggregate_type.as_str() {
            "quotation" => AggregateKind::Quotation,
            "pending_request" => AggregateKind::PendingRequest,
            other => {
                return Err(PersistenceError::DataCorruption(format!(
                    "Unknown aggregate type '{other}' in history entry {}",
                    self.history_id
                )));
            }
        };
        let role: Role = Role::from_str(&self.actor_role)
            .map_err(|e| PersistenceError::DataCorruption(e.to_string()))?;

        Ok(HistoryEntry::new(
            aggregate,
            Some(self.aggregate_id),
            Actor::new(self.actor_id, role),
            self.action,
            self.previous_status,
            self.new_status,
            self.notes,
            self.recorded_at,
        ))
    }
}

/// A pending-registration request row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct PendingRequestRow {
    pub request_id: i64,
    pub number: Option<i64>,
    pub part_code: String,
    pub description: String,
    pub brand: Option<String>,
    pub notes: Option<String>,
    pub requester_id: String,
    pub status: String,
    pub document_json: Option<String>,
    pub handler_id: Option<String>,
    pub rejection_reason: Option<String>,
    pub catalog_part_ref: Option<String>,
    pub catalog_code: Option<String>,
    pub cancelled: i32,
    pub cancel_reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub assigned_at: Option<String>,
    pub responded_at: Option<String>,
    pub concluded_at: Option<String>,
}

impl PendingRequestRow {
    /// Maps this row into a domain pending-registration request.
    ///
    /// # Errors
    ///
    /// Returns `DataCorruption` if the stored status string is not
    /// recognized or the document JSON cannot be parsed.
    pub fn into_domain(self) -> Result<PendingRequest, PersistenceError> {
        let status: PendingStatus = PendingStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::DataCorruption(e.to_string()))?;

        Ok(PendingRequest {
            request_id: Some(self.request_id),
            number: self.number,
            part_code: self.part_code,
            description: self.description,
            brand: self.brand,
            notes: self.notes,
            requester_id: self.requester_id,
            status,
            document: document_from_json(self.document_json.as_deref())?,
            handler_id: self.handler_id,
            rejection_reason: self.rejection_reason,
            catalog_part_ref: self.catalog_part_ref,
            catalog_code: self.catalog_code,
            cancelled: self.cancelled != 0,
            cancel_reason: self.cancel_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
            assigned_at: self.assigned_at,
            responded_at: self.responded_at,
            concluded_at: self.concluded_at,
        })
    }
}
