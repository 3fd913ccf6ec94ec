// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for per-status counts, ownership scoping, and the notification
//! collaborator contract.

use cotaq_audit::AggregateKind;
use cotaq_persistence::Persistence;

use crate::request_response::{CancelPendingRequest, CancelQuotationRequest};
use crate::tests::helpers::{
    MemoryBlobStorage, RecordingNotifier, create_pending_body, create_test_buyer,
    create_test_outsider, create_test_requester, created_quotation, new_persistence,
};
use crate::{
    NoopNotifier, cancel_pending_request, cancel_quotation, create_pending_request,
    pending_status_counts, quotation_status_counts,
};

#[test]
fn test_quotation_counts_scope_by_role() {
    let mut persistence: Persistence = new_persistence();
    created_quotation(&mut persistence, "Acme Mining");
    created_quotation(&mut persistence, "Beta Metals");

    // Procurement sees the whole board
    let all = quotation_status_counts(&mut persistence, &create_test_buyer()).unwrap();
    assert_eq!(all.counts.get("novo"), Some(&2));

    // The requester sees their own
    let own = quotation_status_counts(&mut persistence, &create_test_requester()).unwrap();
    assert_eq!(own.counts.get("novo"), Some(&2));

    // An unrelated vendedor sees nothing
    let outsider = quotation_status_counts(&mut persistence, &create_test_outsider()).unwrap();
    assert!(outsider.counts.is_empty());
}

#[test]
fn test_pending_counts_key_overlay_cancellation() {
    let mut persistence: Persistence = new_persistence();
    let mut storage: MemoryBlobStorage = MemoryBlobStorage::new();

    create_pending_request(
        &mut persistence,
        &mut storage,
        create_pending_body("PC-700"),
        &create_test_requester(),
        &NoopNotifier,
    )
    .unwrap();
    let second = create_pending_request(
        &mut persistence,
        &mut storage,
        create_pending_body("PC-701"),
        &create_test_requester(),
        &NoopNotifier,
    )
    .unwrap();

    cancel_pending_request(
        &mut persistence,
        CancelPendingRequest {
            request_id: second.response.request_id.unwrap(),
            reason: Some(String::from("superseded")),
        },
        &create_test_requester(),
        &NoopNotifier,
    )
    .unwrap();

    let counts = pending_status_counts(&mut persistence, &create_test_buyer()).unwrap();
    assert_eq!(counts.counts.get("pending"), Some(&1));
    assert_eq!(counts.counts.get("cancelled"), Some(&1));
}

#[test]
fn test_notifier_receives_committed_changes() {
    let mut persistence: Persistence = new_persistence();
    let notifier: RecordingNotifier = RecordingNotifier::new();

    let quotation = crate::create_quotation(
        &mut persistence,
        crate::tests::helpers::create_request("Acme Mining"),
        &create_test_requester(),
        &notifier,
    )
    .unwrap();

    cancel_quotation(
        &mut persistence,
        CancelQuotationRequest {
            quotation_id: quotation.response.quotation_id.unwrap(),
            reason: String::from("duplicate"),
        },
        &create_test_requester(),
        &notifier,
    )
    .unwrap();

    let changes = notifier.changes.borrow();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].aggregate, AggregateKind::Quotation);
    assert_eq!(changes[0].previous_status, None);
    assert_eq!(changes[0].new_status, "novo");
    assert_eq!(changes[1].previous_status.as_deref(), Some("novo"));
    assert_eq!(changes[1].new_status, "cancelada");
    assert_eq!(changes[1].requester_id, "vend-1");
}

#[test]
fn test_notifier_failure_cannot_block_the_operation() {
    // The trait returns nothing: there is no failure channel by
    // construction. A panicking implementation would be a collaborator
    // bug, not a core concern; this test just pins the contract that the
    // handler completes with a do-nothing notifier.
    let mut persistence: Persistence = new_persistence();
    let quotation = created_quotation(&mut persistence, "Acme Mining");
    assert!(quotation.quotation_id.is_some());
}
