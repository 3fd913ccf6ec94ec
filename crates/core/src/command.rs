// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cotaq_domain::{DocumentRef, RequestType};

/// Input for one line item on creation or edit.
///
/// An `item_id` of `None` inserts a new item; `Some` updates the existing
/// item in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// The persisted item id, when updating.
    pub item_id: Option<i64>,
    /// The part code requested.
    pub part_code: String,
    /// Free-text description of the part.
    pub description: String,
    /// Requested quantity. Must be greater than zero.
    pub quantity: u32,
    /// Whether the part must first be registered in the external catalog.
    pub needs_registration: bool,
    /// Item-level notes.
    pub notes: Option<String>,
}

/// A per-item pricing response.
///
/// Every field except the target id is optional; partial responses are
/// explicitly allowed and unanswered fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResponse {
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
    /// Catalog code once the part is registered.
    pub catalog_code: Option<String>,
}

/// Input for quotation creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationDraft {
    /// The client this quotation is for.
    pub client_name: String,
    /// External order number, if any.
    pub order_number: Option<String>,
    /// External budget number, if any.
    pub budget_number: Option<String>,
    /// Preferred supplier reference, if any.
    pub preferred_supplier: Option<String>,
    /// What the requester is asking for.
    pub request_type: RequestType,
    /// General notes.
    pub notes: Option<String>,
    /// The initial line items. Must not be empty.
    pub items: Vec<ItemDraft>,
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request a quotation state change; the
/// authorizer is evaluated inside `apply` for every one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A buyer takes the quotation (`novo` → `em_cotacao`).
    Assume,
    /// Record a pricing response (`novo`/`em_cotacao` → `respondida`).
    Respond {
        /// Per-item responses. Items not listed are left untouched.
        responses: Vec<ItemResponse>,
        /// Response notes, recorded on the history entry.
        notes: Option<String>,
        /// Priced-quote document, already persisted by the storage
        /// collaborator.
        quote_document: Option<DocumentRef>,
        /// Technical-proposal document, already persisted by the storage
        /// collaborator.
        proposal_document: Option<DocumentRef>,
    },
    /// Requester approval (`respondida` → `aprovada_para_compra`).
    Approve {
        /// Approval notes, recorded on the history entry.
        notes: Option<String>,
    },
    /// Purchase finalization (`aprovada_para_compra` → `comprada`).
    Purchase {
        /// Purchase notes, recorded on the history entry.
        notes: Option<String>,
    },
    /// Soft-terminal cancellation with a mandatory reason.
    Cancel {
        /// The cancellation reason. Must be non-empty.
        reason: String,
    },
    /// Upsert and remove line items while the quotation is still open.
    EditItems {
        /// Items to update (with id) or insert (without id).
        items: Vec<ItemDraft>,
        /// Ids of items to remove.
        remove_item_ids: Vec<i64>,
    },
}

/// Input for pending-registration request creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDraft {
    /// The part code to register.
    pub part_code: String,
    /// Free-text description of the part.
    pub description: String,
    /// Optional brand.
    pub brand: Option<String>,
    /// General notes.
    pub notes: Option<String>,
    /// Supporting document, already persisted by the storage collaborator.
    pub document: Option<DocumentRef>,
}

/// A command against a pending-registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCommand {
    /// Assign a handler (`pending` → `in_progress`).
    Assign {
        /// The handler to assign.
        handler_id: String,
    },
    /// Record the catalog code. Informational: does not change status.
    Respond {
        /// The catalog code assigned by the external catalog.
        catalog_code: String,
        /// Response notes, recorded on the history entry.
        notes: Option<String>,
    },
    /// Conclude the request (`completed`). Requires a catalog code.
    Conclude,
    /// Reject the request with a mandatory reason.
    Reject {
        /// The rejection reason. Must be non-empty.
        reason: String,
    },
    /// Overlay cancellation. Leaves the underlying status untouched.
    Cancel {
        /// The cancellation reason, if given.
        reason: Option<String>,
    },
}
