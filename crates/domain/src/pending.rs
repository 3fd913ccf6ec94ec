// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::quotation::DocumentRef;
use crate::status::PendingStatus;
use serde::{Deserialize, Serialize};

/// A request to register a new part code in the external catalog.
///
/// This is a separate aggregate from `Quotation`; a completed request may
/// feed its catalog code back into a quotation line item.
///
/// Cancellation is an **overlay**: `cancelled`/`cancel_reason` are set
/// without touching `status`, and both fields stay independently
/// inspectable. Display logic must show the request as cancelled whenever
/// the overlay is set, whatever the underlying status says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the request has not been persisted yet.
    pub request_id: Option<i64>,
    /// Sequential business number. Unique and immutable once allocated.
    pub number: Option<i64>,
    /// The part code to register.
    pub part_code: String,
    /// Free-text description of the part.
    pub description: String,
    /// Optional brand.
    pub brand: Option<String>,
    /// General notes.
    pub notes: Option<String>,
    /// The actor who created the request.
    pub requester_id: String,
    /// Current workflow status. Not touched by the cancellation overlay.
    pub status: PendingStatus,
    /// Supporting document, if any.
    pub document: Option<DocumentRef>,
    /// The handler assigned to work this request.
    pub handler_id: Option<String>,
    /// Rejection reason. Set exactly when status is `rejected`.
    pub rejection_reason: Option<String>,
    /// Reference to the resulting catalog part, if the collaborator
    /// provides one.
    pub catalog_part_ref: Option<String>,
    /// Catalog code recorded by a respond action.
    pub catalog_code: Option<String>,
    /// Cancellation overlay flag.
    pub cancelled: bool,
    /// Cancellation overlay reason.
    pub cancel_reason: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last mutation timestamp (ISO 8601).
    pub updated_at: String,
    /// Set once when a handler is assigned.
    pub assigned_at: Option<String>,
    /// Set once when the catalog code is recorded.
    pub responded_at: Option<String>,
    /// Set once when the request is concluded.
    pub concluded_at: Option<String>,
}

impl PendingRequest {
    /// Creates a new `pending` request without a persisted id or number.
    ///
    /// # Arguments
    ///
    /// * `part_code` - The part code to register
    /// * `description` - Free-text description
    /// * `requester_id` - The creating actor
    /// * `created_at` - Creation timestamp (ISO 8601)
    #[must_use]
    pub fn new(
        part_code: String,
        description: String,
        requester_id: String,
        created_at: String,
    ) -> Self {
        Self {
            request_id: None,
            number: None,
            part_code,
            description,
            brand: None,
            notes: None,
            requester_id,
            status: PendingStatus::Pending,
            document: None,
            handler_id: None,
            rejection_reason: None,
            catalog_part_ref: None,
            catalog_code: None,
            cancelled: false,
            cancel_reason: None,
            updated_at: created_at.clone(),
            created_at,
            assigned_at: None,
            responded_at: None,
            concluded_at: None,
        }
    }

    /// The status to display: the overlay wins over the underlying value.
    ///
    /// The underlying `status` field remains meaningful audit information
    /// and is never rewritten by cancellation.
    #[must_use]
    pub const fn display_status(&self) -> &'static str {
        if self.cancelled {
            "cancelled"
        } else {
            self.status.as_str()
        }
    }

    /// Returns whether any further mutation is admissible.
    ///
    /// Terminal statuses and the cancellation overlay both freeze the
    /// request.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.cancelled || self.status.is_terminal()
    }
}
