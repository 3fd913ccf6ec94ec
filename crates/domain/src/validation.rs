// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::quotation::LineItem;

/// Validates a quotation's basic field constraints.
///
/// This checks required fields only; status rules live in the authorizer.
///
/// # Arguments
///
/// * `client_name` - The client name
/// * `items` - The line items the quotation would hold
///
/// # Errors
///
/// Returns an error if:
/// - The client name is empty
/// - The item list is empty
/// - Any line item is invalid
pub fn validate_quotation_fields(
    client_name: &str,
    items: &[LineItem],
) -> Result<(), DomainError> {
    if client_name.trim().is_empty() {
        return Err(DomainError::InvalidClientName(String::from(
            "Client name cannot be empty",
        )));
    }

    // Rule: a quotation holds at least one line item at all times
    if items.is_empty() {
        return Err(DomainError::EmptyItems);
    }

    for item in items {
        validate_line_item(item)?;
    }

    Ok(())
}

/// Validates a single line item's field constraints.
///
/// # Errors
///
/// Returns an error if:
/// - The part code is empty
/// - The description is empty
/// - The quantity is zero
/// - A set unit price is negative
pub fn validate_line_item(item: &LineItem) -> Result<(), DomainError> {
    if item.part_code.trim().is_empty() {
        return Err(DomainError::InvalidPartCode(String::from(
            "Part code cannot be empty",
        )));
    }

    if item.description.trim().is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Description cannot be empty",
        )));
    }

    if item.quantity == 0 {
        return Err(DomainError::InvalidQuantity { quantity: 0 });
    }

    if let Some(unit_price_cents) = item.unit_price_cents
        && unit_price_cents < 0
    {
        return Err(DomainError::InvalidUnitPrice { unit_price_cents });
    }

    Ok(())
}

/// Validates a pending-registration request's basic field constraints.
///
/// # Errors
///
/// Returns an error if the part code or description is empty.
pub fn validate_pending_fields(part_code: &str, description: &str) -> Result<(), DomainError> {
    if part_code.trim().is_empty() {
        return Err(DomainError::InvalidPartCode(String::from(
            "Part code cannot be empty",
        )));
    }

    if description.trim().is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Description cannot be empty",
        )));
    }

    Ok(())
}

/// Validates a cancellation reason.
///
/// Cancellation is auditable and the reason is mandatory.
///
/// # Errors
///
/// Returns `DomainError::MissingCancellationReason` if the reason is empty
/// or whitespace.
pub fn validate_cancel_reason(reason: &str) -> Result<(), DomainError> {
    if reason.trim().is_empty() {
        return Err(DomainError::MissingCancellationReason);
    }
    Ok(())
}

/// Validates a rejection reason for the pending-registration workflow.
///
/// # Errors
///
/// Returns `DomainError::MissingRejectionReason` if the reason is empty or
/// whitespace.
pub fn validate_rejection_reason(reason: &str) -> Result<(), DomainError> {
    if reason.trim().is_empty() {
        return Err(DomainError::MissingRejectionReason);
    }
    Ok(())
}
