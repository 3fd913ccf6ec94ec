// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use std::collections::BTreeMap;

use cotaq_audit::HistoryEntry;
use cotaq_domain::{DocumentRef, LineItem, PendingRequest, Quotation};

/// An uploaded document as it arrives at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUploadRequest {
    /// The original file name.
    pub file_name: String,
    /// The caller-declared content type.
    pub content_type: String,
    /// The document bytes.
    pub bytes: Vec<u8>,
}

/// One line item as submitted on creation or edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    /// The persisted item id, when updating.
    pub item_id: Option<i64>,
    /// The part code requested.
    pub part_code: String,
    /// Free-text description of the part.
    pub description: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Whether the part needs catalog registration first.
    pub needs_registration: bool,
    /// Item-level notes.
    pub notes: Option<String>,
}

/// One per-item pricing response as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResponseInput {
    /// The line item this response targets.
    pub item_id: i64,
    /// Unit price in cents, if priced.
    pub unit_price_cents: Option<i64>,
    /// Delivery lead time text.
    pub lead_time: Option<String>,
    /// Supplier name for this item.
    pub supplier: Option<String>,
    /// Item-level notes.
    pub notes: Option<String>,
    /// Catalog code once registered.
    pub catalog_code: Option<String>,
}

/// API request to create a new quotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuotationRequest {
    /// The client this quotation is for.
    pub client_name: String,
    /// External order number, if any.
    pub order_number: Option<String>,
    /// External budget number, if any.
    pub budget_number: Option<String>,
    /// Preferred supplier reference, if any.
    pub preferred_supplier: Option<String>,
    /// What is being requested (`quote`, `technical_spec`, `both`).
    pub request_type: String,
    /// General notes.
    pub notes: Option<String>,
    /// The initial line items.
    pub items: Vec<ItemInput>,
}

/// API request for a buyer to assume a quotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumeQuotationRequest {
    /// The quotation to assume.
    pub quotation_id: i64,
}

/// API request to record a pricing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondQuotationRequest {
    /// The quotation to respond to.
    pub quotation_id: i64,
    /// Per-item responses; items not listed are left untouched.
    pub responses: Vec<ItemResponseInput>,
    /// Response notes.
    pub notes: Option<String>,
    /// Priced-quote document to upload, if any.
    pub quote_document: Option<DocumentUploadRequest>,
    /// Technical-proposal document to upload, if any.
    pub proposal_document: Option<DocumentUploadRequest>,
}

/// API request to approve a responded quotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveQuotationRequest {
    /// The quotation to approve.
    pub quotation_id: i64,
    /// Approval notes.
    pub notes: Option<String>,
}

/// API request to finalize a purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseQuotationRequest {
    /// The quotation to purchase.
    pub quotation_id: i64,
    /// Purchase notes.
    pub notes: Option<String>,
}

/// API request to cancel a quotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelQuotationRequest {
    /// The quotation to cancel.
    pub quotation_id: i64,
    /// The mandatory cancellation reason.
    pub reason: String,
}

/// API request to upsert/remove line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditItemsRequest {
    /// The quotation to edit.
    pub quotation_id: i64,
    /// Items to update (with id) or insert (without id).
    pub items: Vec<ItemInput>,
    /// Ids of items to remove.
    pub remove_item_ids: Vec<i64>,
}

/// API request to list quotations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuotationsRequest {
    /// Restrict to one status (wire string).
    pub status: Option<String>,
    /// Restrict to quotations created by this requester.
    pub requester_id: Option<String>,
    /// Restrict to quotations assumed by this buyer.
    pub buyer_id: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Inclusive lower bound on creation time (ISO 8601).
    pub created_from: Option<String>,
    /// Inclusive upper bound on creation time (ISO 8601).
    pub created_to: Option<String>,
    /// Whether finalized quotations are included.
    pub include_finalized: bool,
}

/// API request to create a pending-registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePendingRequest {
    /// The part code to register.
    pub part_code: String,
    /// Free-text description of the part.
    pub description: String,
    /// Optional brand.
    pub brand: Option<String>,
    /// General notes.
    pub notes: Option<String>,
    /// Supporting document to upload, if any.
    pub document: Option<DocumentUploadRequest>,
}

/// API request to assign a handler to a pending-registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignPendingRequest {
    /// The request to assign.
    pub request_id: i64,
    /// The handler to assign.
    pub handler_id: String,
}

/// API request to record a catalog code on a pending-registration
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondPendingRequest {
    /// The request to respond to.
    pub request_id: i64,
    /// The catalog code assigned by the external catalog.
    pub catalog_code: String,
    /// Response notes.
    pub notes: Option<String>,
}

/// API request to conclude a pending-registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcludePendingRequest {
    /// The request to conclude.
    pub request_id: i64,
}

/// API request to reject a pending-registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectPendingRequest {
    /// The request to reject.
    pub request_id: i64,
    /// The mandatory rejection reason.
    pub reason: String,
}

/// API request to overlay-cancel a pending-registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelPendingRequest {
    /// The request to cancel.
    pub request_id: i64,
    /// The cancellation reason, if given.
    pub reason: Option<String>,
}

/// API request to list pending-registration requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPendingRequest {
    /// Restrict to one underlying status (wire string).
    pub status: Option<String>,
    /// Restrict to requests created by this requester.
    pub requester_id: Option<String>,
}

/// A stored document reference as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocumentInfo {
    /// The opaque storage reference.
    pub storage_ref: String,
    /// The display name.
    pub display_name: String,
}

impl DocumentInfo {
    fn from_domain(document: &DocumentRef) -> Self {
        Self {
            storage_ref: document.storage_ref.clone(),
            display_name: document.display_name.clone(),
        }
    }
}

/// A line item as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineItemInfo {
    /// The canonical item id.
    pub item_id: Option<i64>,
    /// The part code.
    pub part_code: String,
    /// The description.
    pub description: String,
    /// The quantity.
    pub quantity: u32,
    /// Unit price in cents, if priced.
    pub unit_price_cents: Option<i64>,
    /// Derived total in cents, if priced.
    pub total_price_cents: Option<i64>,
    /// Delivery lead time text.
    pub lead_time: Option<String>,
    /// Supplier name.
    pub supplier: Option<String>,
    /// Item-level notes.
    pub notes: Option<String>,
    /// Whether the part needs catalog registration.
    pub needs_registration: bool,
    /// Catalog code once registered.
    pub catalog_code: Option<String>,
}

impl LineItemInfo {
    fn from_domain(item: &LineItem) -> Self {
        Self {
            item_id: item.item_id,
            part_code: item.part_code.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
            total_price_cents: item.total_price_cents,
            lead_time: item.lead_time.clone(),
            supplier: item.supplier.clone(),
            notes: item.notes.clone(),
            needs_registration: item.needs_registration,
            catalog_code: item.catalog_code.clone(),
        }
    }
}

/// A quotation as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuotationInfo {
    /// The canonical quotation id.
    pub quotation_id: Option<i64>,
    /// The sequential business number.
    pub number: Option<i64>,
    /// External order number.
    pub order_number: Option<String>,
    /// External budget number.
    pub budget_number: Option<String>,
    /// The client name.
    pub client_name: String,
    /// The requester.
    pub requester_id: String,
    /// The assigned buyer, if any.
    pub buyer_id: Option<String>,
    /// Preferred supplier reference.
    pub preferred_supplier: Option<String>,
    /// The request type wire string.
    pub request_type: String,
    /// The status wire string.
    pub status: String,
    /// The cancellation reason, once cancelled.
    pub cancel_reason: Option<String>,
    /// General notes.
    pub notes: Option<String>,
    /// The priced-quote document.
    pub quote_document: Option<DocumentInfo>,
    /// The technical-proposal document.
    pub proposal_document: Option<DocumentInfo>,
    /// The line items.
    pub items: Vec<LineItemInfo>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last mutation timestamp.
    pub updated_at: String,
    /// Response timestamp, once responded.
    pub responded_at: Option<String>,
    /// Approval timestamp, once approved.
    pub approved_at: Option<String>,
    /// Purchase timestamp, once purchased.
    pub purchased_at: Option<String>,
    /// Cancellation timestamp, once cancelled.
    pub cancelled_at: Option<String>,
}

impl QuotationInfo {
    /// Builds the response DTO from a domain quotation.
    #[must_use]
    pub fn from_domain(quotation: &Quotation) -> Self {
        Self {
            quotation_id: quotation.quotation_id,
            number: quotation.number,
            order_number: quotation.order_number.clone(),
            budget_number: quotation.budget_number.clone(),
            client_name: quotation.client_name.clone(),
            requester_id: quotation.requester_id.clone(),
            buyer_id: quotation.buyer_id.clone(),
            preferred_supplier: quotation.preferred_supplier.clone(),
            request_type: quotation.request_type.as_str().to_string(),
            status: quotation.status.as_str().to_string(),
            cancel_reason: quotation.cancel_reason.clone(),
            notes: quotation.notes.clone(),
            quote_document: quotation.quote_document.as_ref().map(DocumentInfo::from_domain),
            proposal_document: quotation
                .proposal_document
                .as_ref()
                .map(DocumentInfo::from_domain),
            items: quotation.items.iter().map(LineItemInfo::from_domain).collect(),
            created_at: quotation.created_at.clone(),
            updated_at: quotation.updated_at.clone(),
            responded_at: quotation.responded_at.clone(),
            approved_at: quotation.approved_at.clone(),
            purchased_at: quotation.purchased_at.clone(),
            cancelled_at: quotation.cancelled_at.clone(),
        }
    }
}

/// A pending-registration request as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PendingRequestInfo {
    /// The canonical request id.
    pub request_id: Option<i64>,
    /// The sequential business number.
    pub number: Option<i64>,
    /// The part code.
    pub part_code: String,
    /// The description.
    pub description: String,
    /// The brand, if given.
    pub brand: Option<String>,
    /// General notes.
    pub notes: Option<String>,
    /// The requester.
    pub requester_id: String,
    /// The underlying status wire string.
    pub status: String,
    /// The status to display: the cancellation overlay wins.
    pub display_status: String,
    /// The supporting document, if any.
    pub document: Option<DocumentInfo>,
    /// The assigned handler, if any.
    pub handler_id: Option<String>,
    /// The rejection reason, once rejected.
    pub rejection_reason: Option<String>,
    /// The resulting catalog part reference, if any.
    pub catalog_part_ref: Option<String>,
    /// The recorded catalog code, if any.
    pub catalog_code: Option<String>,
    /// The cancellation overlay flag.
    pub cancelled: bool,
    /// The cancellation overlay reason.
    pub cancel_reason: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last mutation timestamp.
    pub updated_at: String,
    /// Assignment timestamp, once assigned.
    pub assigned_at: Option<String>,
    /// Response timestamp, once responded.
    pub responded_at: Option<String>,
    /// Conclusion timestamp, once concluded.
    pub concluded_at: Option<String>,
}

impl PendingRequestInfo {
    /// Builds the response DTO from a domain request.
    #[must_use]
    pub fn from_domain(request: &PendingRequest) -> Self {
        Self {
            request_id: request.request_id,
            number: request.number,
            part_code: request.part_code.clone(),
            description: request.description.clone(),
            brand: request.brand.clone(),
            notes: request.notes.clone(),
            requester_id: request.requester_id.clone(),
            status: request.status.as_str().to_string(),
            display_status: request.display_status().to_string(),
            document: request.document.as_ref().map(DocumentInfo::from_domain),
            handler_id: request.handler_id.clone(),
            rejection_reason: request.rejection_reason.clone(),
            catalog_part_ref: request.catalog_part_ref.clone(),
            catalog_code: request.catalog_code.clone(),
            cancelled: request.cancelled,
            cancel_reason: request.cancel_reason.clone(),
            created_at: request.created_at.clone(),
            updated_at: request.updated_at.clone(),
            assigned_at: request.assigned_at.clone(),
            responded_at: request.responded_at.clone(),
            concluded_at: request.concluded_at.clone(),
        }
    }
}

/// A history entry as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntryInfo {
    /// The acting user.
    pub actor_id: String,
    /// The role the actor held.
    pub actor_role: String,
    /// The action tag.
    pub action: String,
    /// The status before the operation.
    pub previous_status: Option<String>,
    /// The status after the operation.
    pub new_status: String,
    /// Notes supplied with the operation.
    pub notes: Option<String>,
    /// When the operation was recorded.
    pub recorded_at: String,
}

impl HistoryEntryInfo {
    /// Builds the response DTO from an audit history entry.
    #[must_use]
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            actor_id: entry.actor.id.clone(),
            actor_role: entry.actor.role.as_str().to_string(),
            action: entry.action.clone(),
            previous_status: entry.previous_status.clone(),
            new_status: entry.new_status.clone(),
            notes: entry.notes.clone(),
            recorded_at: entry.recorded_at.clone(),
        }
    }
}

/// API response for a successful hard delete of a quotation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteQuotationResponse {
    /// The deleted quotation id.
    pub quotation_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful hard delete of a pending-registration
/// request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeletePendingResponse {
    /// The deleted request id.
    pub request_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for per-status counts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusCountsResponse {
    /// Count per status wire string.
    pub counts: BTreeMap<String, i64>,
}

/// API response for the display-only number peek.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PeekNumberResponse {
    /// The number the next allocation would assign. Display-only; the
    /// creation transaction may assign a different value.
    pub next_number: i64,
}
