// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the pending-registration sub-workflow.

use crate::{CoreError, PendingCommand, PendingDraft, apply_pending, open_pending_request};
use cotaq_domain::{DomainError, PendingRequest, PendingStatus, TransitionDenied};

use super::helpers::{create_test_buyer, create_test_requester, test_now};

fn draft() -> PendingDraft {
    PendingDraft {
        part_code: String::from("PC-700"),
        description: String::from("Tapered roller bearing"),
        brand: Some(String::from("SKF")),
        notes: None,
        document: None,
    }
}

fn persisted_request() -> PendingRequest {
    let mut request: PendingRequest =
        open_pending_request(draft(), create_test_requester(), test_now())
            .unwrap()
            .request;
    request.request_id = Some(1);
    request.number = Some(50);
    request
}

#[test]
fn test_creation_starts_pending() {
    let result = open_pending_request(draft(), create_test_requester(), test_now()).unwrap();

    assert_eq!(result.request.status, PendingStatus::Pending);
    assert_eq!(result.request.number, None);
    assert!(!result.request.cancelled);
    assert_eq!(result.request.brand.as_deref(), Some("SKF"));

    assert_eq!(result.history_entry.action, "criada");
    assert_eq!(result.history_entry.new_status, "pending");
}

#[test]
fn test_creation_rejects_empty_description() {
    let mut invalid = draft();
    invalid.description = String::from(" ");

    let result = open_pending_request(invalid, create_test_requester(), test_now());

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidDescription(_))
    ));
}

#[test]
fn test_assign_moves_to_in_progress() {
    let request = persisted_request();

    let result = apply_pending(
        &request,
        PendingCommand::Assign {
            handler_id: String::from("comp-1"),
        },
        create_test_buyer(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.new_request.status, PendingStatus::InProgress);
    assert_eq!(result.new_request.handler_id.as_deref(), Some("comp-1"));
    assert!(result.new_request.assigned_at.is_some());
    assert_eq!(result.history_entry.action, "atribuida");
}

#[test]
fn test_respond_records_code_without_moving_status() {
    let request = persisted_request();

    let result = apply_pending(
        &request,
        PendingCommand::Respond {
            catalog_code: String::from("SK-1234"),
            notes: None,
        },
        create_test_buyer(),
        test_now(),
    )
    .unwrap();

    // Respond is informational: the status stays where it was
    assert_eq!(result.new_request.status, PendingStatus::Pending);
    assert_eq!(result.new_request.catalog_code.as_deref(), Some("SK-1234"));
    assert!(result.new_request.responded_at.is_some());
    assert_eq!(result.history_entry.previous_status.as_deref(), Some("pending"));
    assert_eq!(result.history_entry.new_status, "pending");
}

#[test]
fn test_respond_rejects_empty_catalog_code() {
    let request = persisted_request();

    let result = apply_pending(
        &request,
        PendingCommand::Respond {
            catalog_code: String::from("  "),
            notes: None,
        },
        create_test_buyer(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::MissingCatalogCode)
    ));
}

#[test]
fn test_respond_then_conclude_completes_the_request() {
    let request = persisted_request();

    let responded = apply_pending(
        &request,
        PendingCommand::Respond {
            catalog_code: String::from("SK-1234"),
            notes: None,
        },
        create_test_buyer(),
        test_now(),
    )
    .unwrap()
    .new_request;

    let result = apply_pending(
        &responded,
        PendingCommand::Conclude,
        create_test_buyer(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.new_request.status, PendingStatus::Completed);
    assert_eq!(result.new_request.catalog_code.as_deref(), Some("SK-1234"));
    assert!(result.new_request.concluded_at.is_some());
    assert_eq!(result.history_entry.action, "concluida");
}

#[test]
fn test_conclude_requires_catalog_code() {
    let request = persisted_request();

    let result = apply_pending(
        &request,
        PendingCommand::Conclude,
        create_test_buyer(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::MissingCatalogCode)
    ));
}

#[test]
fn test_reject_requires_reason() {
    let request = persisted_request();

    let missing = apply_pending(
        &request,
        PendingCommand::Reject {
            reason: String::new(),
        },
        create_test_buyer(),
        test_now(),
    );
    assert!(matches!(
        missing.unwrap_err(),
        CoreError::DomainViolation(DomainError::MissingRejectionReason)
    ));

    let result = apply_pending(
        &request,
        PendingCommand::Reject {
            reason: String::from("not a stocked part"),
        },
        create_test_buyer(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.new_request.status, PendingStatus::Rejected);
    assert_eq!(
        result.new_request.rejection_reason.as_deref(),
        Some("not a stocked part")
    );
}

#[test]
fn test_cancel_is_an_overlay_not_a_status() {
    let request = persisted_request();

    let assigned = apply_pending(
        &request,
        PendingCommand::Assign {
            handler_id: String::from("comp-1"),
        },
        create_test_buyer(),
        test_now(),
    )
    .unwrap()
    .new_request;

    let result = apply_pending(
        &assigned,
        PendingCommand::Cancel {
            reason: Some(String::from("superseded")),
        },
        create_test_requester(),
        test_now(),
    )
    .unwrap();

    // Both fields stay independently inspectable
    assert!(result.new_request.cancelled);
    assert_eq!(
        result.new_request.cancel_reason.as_deref(),
        Some("superseded")
    );
    assert_eq!(result.new_request.status, PendingStatus::InProgress);
    assert_eq!(result.new_request.display_status(), "cancelled");
    assert_eq!(result.history_entry.new_status, "cancelled");

    // Once set, the overlay freezes the request
    let further = apply_pending(
        &result.new_request,
        PendingCommand::Conclude,
        create_test_buyer(),
        test_now(),
    );
    assert!(matches!(
        further.unwrap_err(),
        CoreError::Denied(TransitionDenied::WrongState {
            status: "cancelled",
            ..
        })
    ));
}

#[test]
fn test_terminal_statuses_reject_further_transitions() {
    let request = persisted_request();

    let rejected = apply_pending(
        &request,
        PendingCommand::Reject {
            reason: String::from("obsolete part"),
        },
        create_test_buyer(),
        test_now(),
    )
    .unwrap()
    .new_request;

    let result = apply_pending(
        &rejected,
        PendingCommand::Cancel { reason: None },
        create_test_buyer(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::Denied(TransitionDenied::WrongState { .. })
    ));
}
