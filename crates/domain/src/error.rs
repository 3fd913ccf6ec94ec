// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Client name is empty or invalid.
    InvalidClientName(String),
    /// Part code is empty or invalid.
    InvalidPartCode(String),
    /// Item description is empty or invalid.
    InvalidDescription(String),
    /// Item quantity must be greater than zero.
    InvalidQuantity {
        /// The invalid quantity value.
        quantity: u32,
    },
    /// Unit price is invalid (negative).
    InvalidUnitPrice {
        /// The invalid price in cents.
        unit_price_cents: i64,
    },
    /// Line total computation overflowed.
    PriceOverflow {
        /// The quantity involved.
        quantity: u32,
        /// The unit price in cents involved.
        unit_price_cents: i64,
    },
    /// Cancellation requires a non-empty reason.
    MissingCancellationReason,
    /// Rejection requires a non-empty reason.
    MissingRejectionReason,
    /// A quotation must keep at least one line item.
    EmptyItems,
    /// The referenced line item does not exist on the quotation.
    ItemNotFound {
        /// The line item identifier.
        item_id: i64,
    },
    /// Concluding a registration request requires a catalog code.
    MissingCatalogCode,
    /// Purchase is blocked while items still need catalog registration.
    UnregisteredItems {
        /// How many items lack a catalog code.
        count: usize,
    },
    /// Quotation status string is not recognized.
    InvalidStatus(String),
    /// Pending-registration status string is not recognized.
    InvalidPendingStatus(String),
    /// Role string is not recognized.
    InvalidRole(String),
    /// Request type string is not recognized.
    InvalidRequestType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClientName(msg) => write!(f, "Invalid client name: {msg}"),
            Self::InvalidPartCode(msg) => write!(f, "Invalid part code: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity: {quantity}. Must be greater than 0")
            }
            Self::InvalidUnitPrice { unit_price_cents } => {
                write!(
                    f,
                    "Invalid unit price: {unit_price_cents} cents. Must not be negative"
                )
            }
            Self::PriceOverflow {
                quantity,
                unit_price_cents,
            } => {
                write!(
                    f,
                    "Line total overflow for quantity {quantity} at {unit_price_cents} cents"
                )
            }
            Self::MissingCancellationReason => {
                write!(f, "Cancellation requires a non-empty reason")
            }
            Self::MissingRejectionReason => {
                write!(f, "Rejection requires a non-empty reason")
            }
            Self::EmptyItems => {
                write!(f, "A quotation must keep at least one line item")
            }
            Self::ItemNotFound { item_id } => {
                write!(f, "Line item {item_id} not found on the quotation")
            }
            Self::MissingCatalogCode => {
                write!(f, "A non-empty catalog code is required")
            }
            Self::UnregisteredItems { count } => {
                write!(
                    f,
                    "Purchase blocked: {count} item(s) still need catalog registration"
                )
            }
            Self::InvalidStatus(s) => write!(f, "Unknown quotation status: {s}"),
            Self::InvalidPendingStatus(s) => {
                write!(f, "Unknown pending-registration status: {s}")
            }
            Self::InvalidRole(s) => write!(f, "Unknown role: {s}"),
            Self::InvalidRequestType(s) => write!(f, "Unknown request type: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}
