// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::{QuotationStatus, RequestType};
use serde::{Deserialize, Serialize};

/// A reference to a document held by the blob storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// The opaque storage reference usable for later retrieval.
    pub storage_ref: String,
    /// The display name shown to users (original file name).
    pub display_name: String,
}

impl DocumentRef {
    /// Creates a new `DocumentRef`.
    ///
    /// # Arguments
    ///
    /// * `storage_ref` - The opaque storage reference
    /// * `display_name` - The display name for the document
    #[must_use]
    pub const fn new(storage_ref: String, display_name: String) -> Self {
        Self {
            storage_ref,
            display_name,
        }
    }
}

/// Computes a line total from a quantity and a unit price in cents.
///
/// The stored total must equal this value whenever a unit price is set;
/// every pricing write recomputes it through this function.
///
/// # Errors
///
/// Returns an error if the unit price is negative or the multiplication
/// overflows `i64`.
pub fn compute_line_total(quantity: u32, unit_price_cents: i64) -> Result<i64, DomainError> {
    if unit_price_cents < 0 {
        return Err(DomainError::InvalidUnitPrice { unit_price_cents });
    }
    i64::from(quantity)
        .checked_mul(unit_price_cents)
        .ok_or(DomainError::PriceOverflow {
            quantity,
            unit_price_cents,
        })
}

/// One priced part entry within a quotation.
///
/// Line items share the parent quotation's lifecycle but are priced
/// independently; a partial pricing response leaves unanswered items
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the item has not been persisted yet.
    pub item_id: Option<i64>,
    /// The part code requested.
    pub part_code: String,
    /// Free-text description of the part.
    pub description: String,
    /// Requested quantity. Always greater than zero.
    pub quantity: u32,
    /// Unit price in cents. Absent until a buyer prices the item.
    pub unit_price_cents: Option<i64>,
    /// Derived total in cents: `quantity × unit_price_cents`.
    pub total_price_cents: Option<i64>,
    /// Delivery lead time text supplied by the buyer.
    pub lead_time: Option<String>,
    /// Supplier name for this item (free text).
    pub supplier: Option<String>,
    /// Item-level notes.
    pub notes: Option<String>,
    /// Whether the part must first be registered in the external catalog.
    pub needs_registration: bool,
    /// Catalog code filled by a pricing response once registration exists.
    /// Meaningful only when `needs_registration` is set.
    pub catalog_code: Option<String>,
}

impl LineItem {
    /// Creates a new unpriced `LineItem` without a persisted id.
    ///
    /// # Arguments
    ///
    /// * `part_code` - The part code requested
    /// * `description` - Free-text description
    /// * `quantity` - Requested quantity
    /// * `needs_registration` - Whether the part needs catalog registration
    #[must_use]
    pub const fn new(
        part_code: String,
        description: String,
        quantity: u32,
        needs_registration: bool,
    ) -> Self {
        Self {
            item_id: None,
            part_code,
            description,
            quantity,
            unit_price_cents: None,
            total_price_cents: None,
            lead_time: None,
            supplier: None,
            notes: None,
            needs_registration,
            catalog_code: None,
        }
    }

    /// Sets the unit price and recomputes the derived total.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is negative or the total overflows.
    pub fn set_unit_price(&mut self, unit_price_cents: i64) -> Result<(), DomainError> {
        let total: i64 = compute_line_total(self.quantity, unit_price_cents)?;
        self.unit_price_cents = Some(unit_price_cents);
        self.total_price_cents = Some(total);
        Ok(())
    }

    /// Recomputes the derived total from the current quantity and price.
    ///
    /// Called after a quantity edit so a stale total can never survive.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored price is negative or the total
    /// overflows.
    pub fn recompute_total(&mut self) -> Result<(), DomainError> {
        self.total_price_cents = match self.unit_price_cents {
            Some(price) => Some(compute_line_total(self.quantity, price)?),
            None => None,
        };
        Ok(())
    }

    /// Returns whether this item still needs a catalog code before the
    /// quotation can be purchased.
    #[must_use]
    pub const fn awaits_registration(&self) -> bool {
        self.needs_registration && self.catalog_code.is_none()
    }
}

/// A procurement request for one or more parts (aggregate root).
///
/// Tracked through the status lifecycle; owns its line items. All
/// timestamps are ISO 8601 strings; the once-only ones are set on the
/// matching transition and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the quotation has not been persisted yet.
    pub quotation_id: Option<i64>,
    /// Sequential business number. Unique and immutable once allocated.
    /// `None` only for legacy rows awaiting the backfill migration.
    pub number: Option<i64>,
    /// External order number, if any.
    pub order_number: Option<String>,
    /// External budget number, if any.
    pub budget_number: Option<String>,
    /// The client this quotation is for.
    pub client_name: String,
    /// The actor who created the quotation.
    pub requester_id: String,
    /// The buyer who assumed the quotation, once assigned.
    pub buyer_id: Option<String>,
    /// Preferred supplier reference, if any.
    pub preferred_supplier: Option<String>,
    /// What the requester is asking for.
    pub request_type: RequestType,
    /// Current lifecycle status.
    pub status: QuotationStatus,
    /// Cancellation reason. Set exactly when status is `cancelada`.
    pub cancel_reason: Option<String>,
    /// General notes.
    pub notes: Option<String>,
    /// Priced-quote document attached by the pricing response.
    pub quote_document: Option<DocumentRef>,
    /// Technical-proposal document attached by the pricing response.
    pub proposal_document: Option<DocumentRef>,
    /// The line items. Never empty.
    pub items: Vec<LineItem>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last mutation timestamp (ISO 8601).
    pub updated_at: String,
    /// Set once when the pricing response is recorded.
    pub responded_at: Option<String>,
    /// Set once when the requester approves.
    pub approved_at: Option<String>,
    /// Set once when the purchase is finalized.
    pub purchased_at: Option<String>,
    /// Set once when the quotation is cancelled.
    pub cancelled_at: Option<String>,
}

impl Quotation {
    /// Creates a new `novo` quotation without a persisted id or number.
    ///
    /// The id is assigned by the persistence layer and the number by the
    /// allocator, both inside the creation transaction.
    ///
    /// # Arguments
    ///
    /// * `client_name` - The client this quotation is for
    /// * `requester_id` - The creating actor
    /// * `request_type` - What is being requested
    /// * `items` - The initial line items (must not be empty)
    /// * `created_at` - Creation timestamp (ISO 8601)
    #[must_use]
    pub fn new(
        client_name: String,
        requester_id: String,
        request_type: RequestType,
        items: Vec<LineItem>,
        created_at: String,
    ) -> Self {
        Self {
            quotation_id: None,
            number: None,
            order_number: None,
            budget_number: None,
            client_name,
            requester_id,
            buyer_id: None,
            preferred_supplier: None,
            request_type,
            status: QuotationStatus::Novo,
            cancel_reason: None,
            notes: None,
            quote_document: None,
            proposal_document: None,
            items,
            updated_at: created_at.clone(),
            created_at,
            responded_at: None,
            approved_at: None,
            purchased_at: None,
            cancelled_at: None,
        }
    }

    /// Finds a line item by its persisted id.
    #[must_use]
    pub fn find_item(&self, item_id: i64) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.item_id == Some(item_id))
    }

    /// Finds a line item by its persisted id, mutably.
    pub fn find_item_mut(&mut self, item_id: i64) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.item_id == Some(item_id))
    }

    /// Returns the line items that still need catalog registration before
    /// purchase.
    #[must_use]
    pub fn unregistered_items(&self) -> Vec<&LineItem> {
        self.items
            .iter()
            .filter(|item| item.awaits_registration())
            .collect()
    }
}
