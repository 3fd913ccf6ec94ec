// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cotaq::CoreError;
use cotaq_domain::{DomainError, TransitionDenied};
use cotaq_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Authorization failures and state conflicts are separate
/// kinds: "you may never do this" and "not while the aggregate is in
/// this status" must both surface clearly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role that attempted it.
        role: String,
    },
    /// The action is valid for the actor but not for the current status.
    StateConflict {
        /// The action that was attempted.
        action: String,
        /// The status the aggregate was in.
        status: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A document upload failed; the enclosing operation was aborted
    /// before any write.
    UploadFailed {
        /// A description of the upload failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { action, role } => {
                write!(f, "Unauthorized: role '{role}' may not perform '{action}'")
            }
            Self::StateConflict { action, status } => {
                write!(f, "State conflict: cannot '{action}' while status is '{status}'")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::UploadFailed { message } => {
                write!(f, "Upload failed: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidClientName(msg) => ApiError::InvalidInput {
            field: String::from("client_name"),
            message: msg,
        },
        DomainError::InvalidPartCode(msg) => ApiError::InvalidInput {
            field: String::from("part_code"),
            message: msg,
        },
        DomainError::InvalidDescription(msg) => ApiError::InvalidInput {
            field: String::from("description"),
            message: msg,
        },
        DomainError::InvalidQuantity { quantity } => ApiError::InvalidInput {
            field: String::from("quantity"),
            message: format!("Invalid quantity: {quantity}. Must be greater than 0"),
        },
        DomainError::InvalidUnitPrice { unit_price_cents } => ApiError::InvalidInput {
            field: String::from("unit_price_cents"),
            message: format!("Invalid unit price: {unit_price_cents} cents. Must not be negative"),
        },
        DomainError::PriceOverflow {
            quantity,
            unit_price_cents,
        } => ApiError::InvalidInput {
            field: String::from("unit_price_cents"),
            message: format!(
                "Line total overflow for quantity {quantity} at {unit_price_cents} cents"
            ),
        },
        DomainError::MissingCancellationReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("Cancellation requires a non-empty reason"),
        },
        DomainError::MissingRejectionReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("Rejection requires a non-empty reason"),
        },
        DomainError::EmptyItems => ApiError::DomainRuleViolation {
            rule: String::from("minimum_items"),
            message: String::from("A quotation must keep at least one line item"),
        },
        DomainError::ItemNotFound { item_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Line item"),
            message: format!("Line item {item_id} not found on the quotation"),
        },
        DomainError::MissingCatalogCode => ApiError::DomainRuleViolation {
            rule: String::from("catalog_code_required"),
            message: String::from("A non-empty catalog code is required"),
        },
        DomainError::UnregisteredItems { count } => ApiError::DomainRuleViolation {
            rule: String::from("registration_required"),
            message: format!(
                "Purchase blocked: {count} item(s) still need catalog registration"
            ),
        },
        DomainError::InvalidStatus(s) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown quotation status: {s}"),
        },
        DomainError::InvalidPendingStatus(s) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown pending-registration status: {s}"),
        },
        DomainError::InvalidRole(s) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role: {s}"),
        },
        DomainError::InvalidRequestType(s) => ApiError::InvalidInput {
            field: String::from("request_type"),
            message: format!("Unknown request type: {s}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly. The authorizer's two denial kinds map onto the two distinct
/// API error kinds.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Denied(TransitionDenied::NotPermitted { action, role }) => {
            ApiError::Unauthorized {
                action: action.to_string(),
                role: role.as_str().to_string(),
            }
        }
        CoreError::Denied(TransitionDenied::WrongState { action, status }) => {
            ApiError::StateConflict {
                action: action.to_string(),
                status: status.to_string(),
            }
        }
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Not-found kinds keep their identity; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::QuotationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Quotation"),
            message: format!("Quotation {id} does not exist"),
        },
        PersistenceError::PendingRequestNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Pending-registration request"),
            message: format!("Pending-registration request {id} does not exist"),
        },
        other => ApiError::Internal {
            message: format!("Persistence error: {other}"),
        },
    }
}
