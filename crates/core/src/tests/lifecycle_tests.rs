// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the quotation lifecycle: creation through purchase or
//! cancellation, with wrong-state and wrong-role attempts rejected by
//! their specific error kinds.

use crate::{
    Command, CoreError, CreationResult, ItemResponse, TransitionResult, apply, open_quotation,
};
use cotaq_domain::{DocumentRef, DomainError, QuotationStatus, TransitionDenied};

use super::helpers::{
    create_test_admin, create_test_buyer, create_test_requester, persisted_quotation, test_now,
    two_item_draft,
};

fn price_first_item(unit_price_cents: i64) -> Command {
    Command::Respond {
        responses: vec![ItemResponse {
            item_id: 1,
            unit_price_cents: Some(unit_price_cents),
            lead_time: Some(String::from("15 days")),
            supplier: Some(String::from("Rolamentos Sul")),
            notes: None,
            catalog_code: None,
        }],
        notes: Some(String::from("partial response")),
        quote_document: None,
        proposal_document: None,
    }
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_creation_starts_novo_with_unpriced_items() {
    let result: CreationResult =
        open_quotation(two_item_draft(), create_test_requester(), test_now()).unwrap();

    assert_eq!(result.quotation.status, QuotationStatus::Novo);
    assert_eq!(result.quotation.number, None);
    assert_eq!(result.quotation.items.len(), 2);
    for item in &result.quotation.items {
        assert_eq!(item.unit_price_cents, None);
        assert_eq!(item.total_price_cents, None);
    }

    assert_eq!(result.history_entry.action, "criada");
    assert_eq!(result.history_entry.previous_status, None);
    assert_eq!(result.history_entry.new_status, "novo");
}

#[test]
fn test_creation_rejects_empty_item_list() {
    let mut draft = two_item_draft();
    draft.items.clear();

    let result = open_quotation(draft, create_test_requester(), test_now());

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::EmptyItems)
    ));
}

// ============================================================================
// Respond
// ============================================================================

#[test]
fn test_partial_response_prices_only_targeted_item() {
    let quotation = persisted_quotation();

    let result: TransitionResult = apply(
        &quotation,
        price_first_item(1000),
        create_test_buyer(),
        test_now(),
    )
    .unwrap();

    let new_quotation = &result.new_quotation;
    assert_eq!(new_quotation.status, QuotationStatus::Respondida);
    assert!(new_quotation.responded_at.is_some());
    assert_eq!(new_quotation.buyer_id.as_deref(), Some("comp-1"));

    // Quantity 3 at 1000 cents: derived total must hold
    let priced = new_quotation.find_item(1).unwrap();
    assert_eq!(priced.unit_price_cents, Some(1000));
    assert_eq!(priced.total_price_cents, Some(3000));
    assert_eq!(priced.lead_time.as_deref(), Some("15 days"));

    // The unanswered item is untouched
    let untouched = new_quotation.find_item(2).unwrap();
    assert_eq!(untouched.unit_price_cents, None);
    assert_eq!(untouched.total_price_cents, None);

    assert_eq!(result.history_entry.action, "respondida");
    assert_eq!(
        result.history_entry.previous_status.as_deref(),
        Some("novo")
    );
    assert_eq!(result.history_entry.new_status, "respondida");
}

#[test]
fn test_respond_attaches_documents() {
    let quotation = persisted_quotation();

    let command = Command::Respond {
        responses: Vec::new(),
        notes: None,
        quote_document: Some(DocumentRef::new(
            String::from("blob://quotes/abc"),
            String::from("quote.pdf"),
        )),
        proposal_document: None,
    };

    let result = apply(&quotation, command, create_test_buyer(), test_now()).unwrap();

    assert_eq!(
        result
            .new_quotation
            .quote_document
            .as_ref()
            .map(|d| d.storage_ref.as_str()),
        Some("blob://quotes/abc")
    );
    assert_eq!(result.new_quotation.proposal_document, None);
}

#[test]
fn test_respond_rejects_unknown_item_id() {
    let quotation = persisted_quotation();

    let command = Command::Respond {
        responses: vec![ItemResponse {
            item_id: 99,
            unit_price_cents: Some(100),
            lead_time: None,
            supplier: None,
            notes: None,
            catalog_code: None,
        }],
        notes: None,
        quote_document: None,
        proposal_document: None,
    };

    let result = apply(&quotation, command, create_test_buyer(), test_now());

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ItemNotFound { item_id: 99 })
    ));
}

#[test]
fn test_respond_denied_for_unauthorized_actor() {
    let quotation = persisted_quotation();
    let outsider = cotaq_audit::Actor::new(
        String::from("vend-9"),
        cotaq_domain::Role::Vendedor,
    );

    let result = apply(&quotation, price_first_item(1000), outsider, test_now());

    // AuthorizationError, not a state conflict; nothing was changed since
    // apply is pure and the caller discards the input on error
    assert!(matches!(
        result.unwrap_err(),
        CoreError::Denied(TransitionDenied::NotPermitted {
            action: "respond",
            ..
        })
    ));
}

// ============================================================================
// Approve & Purchase
// ============================================================================

fn responded_quotation() -> cotaq_domain::Quotation {
    let quotation = persisted_quotation();
    apply(
        &quotation,
        price_first_item(1000),
        create_test_buyer(),
        test_now(),
    )
    .unwrap()
    .new_quotation
}

#[test]
fn test_approve_moves_to_aprovada_and_stamps_once() {
    let quotation = responded_quotation();

    let result = apply(
        &quotation,
        Command::Approve { notes: None },
        create_test_requester(),
        test_now(),
    )
    .unwrap();

    assert_eq!(
        result.new_quotation.status,
        QuotationStatus::AprovadaParaCompra
    );
    assert!(result.new_quotation.approved_at.is_some());
    assert_eq!(result.history_entry.action, "aprovada");

    // A second approval attempt is a state conflict, not an auth failure
    let second = apply(
        &result.new_quotation,
        Command::Approve { notes: None },
        create_test_requester(),
        test_now(),
    );
    assert!(matches!(
        second.unwrap_err(),
        CoreError::Denied(TransitionDenied::WrongState {
            action: "approve",
            status: "aprovada_para_compra"
        })
    ));
}

#[test]
fn test_purchase_finalizes_and_is_not_idempotent() {
    let quotation = responded_quotation();
    let approved = apply(
        &quotation,
        Command::Approve { notes: None },
        create_test_requester(),
        test_now(),
    )
    .unwrap()
    .new_quotation;

    let result = apply(
        &approved,
        Command::Purchase { notes: None },
        create_test_buyer(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.new_quotation.status, QuotationStatus::Comprada);
    assert!(result.new_quotation.purchased_at.is_some());

    // Re-invoking purchase must fail, never silently succeed
    let second = apply(
        &result.new_quotation,
        Command::Purchase { notes: None },
        create_test_buyer(),
        test_now(),
    );
    assert!(matches!(
        second.unwrap_err(),
        CoreError::Denied(TransitionDenied::WrongState { .. })
    ));
}

#[test]
fn test_purchase_blocked_while_items_need_registration() {
    let mut quotation = responded_quotation();
    quotation.status = QuotationStatus::AprovadaParaCompra;
    {
        let item = quotation.find_item_mut(2).unwrap();
        item.needs_registration = true;
        item.catalog_code = None;
    }

    let result = apply(
        &quotation,
        Command::Purchase { notes: None },
        create_test_buyer(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::UnregisteredItems { count: 1 })
    ));
}

// ============================================================================
// Cancel
// ============================================================================

#[test]
fn test_cancel_requires_reason_and_is_terminal() {
    let quotation = persisted_quotation();

    let missing = apply(
        &quotation,
        Command::Cancel {
            reason: String::from("  "),
        },
        create_test_admin(),
        test_now(),
    );
    assert!(matches!(
        missing.unwrap_err(),
        CoreError::DomainViolation(DomainError::MissingCancellationReason)
    ));

    let result = apply(
        &quotation,
        Command::Cancel {
            reason: String::from("duplicate"),
        },
        create_test_admin(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.new_quotation.status, QuotationStatus::Cancelada);
    assert_eq!(
        result.new_quotation.cancel_reason.as_deref(),
        Some("duplicate")
    );
    assert!(result.new_quotation.cancelled_at.is_some());

    // Terminal: a second cancel fails
    let second = apply(
        &result.new_quotation,
        Command::Cancel {
            reason: String::from("again"),
        },
        create_test_admin(),
        test_now(),
    );
    assert!(matches!(
        second.unwrap_err(),
        CoreError::Denied(TransitionDenied::WrongState {
            action: "cancel",
            status: "cancelada"
        })
    ));
}

// ============================================================================
// Assume
// ============================================================================

#[test]
fn test_assume_assigns_buyer_and_moves_to_em_cotacao() {
    let quotation = persisted_quotation();

    let result = apply(&quotation, Command::Assume, create_test_buyer(), test_now()).unwrap();

    assert_eq!(result.new_quotation.status, QuotationStatus::EmCotacao);
    assert_eq!(result.new_quotation.buyer_id.as_deref(), Some("comp-1"));
    assert_eq!(result.history_entry.action, "assumida");
}

// ============================================================================
// History invariants
// ============================================================================

#[test]
fn test_every_transition_produces_matching_history() {
    let quotation = persisted_quotation();

    let responded = apply(
        &quotation,
        price_first_item(500),
        create_test_buyer(),
        test_now(),
    )
    .unwrap();
    assert_eq!(
        responded.history_entry.previous_status.as_deref(),
        Some(quotation.status.as_str())
    );
    assert_eq!(
        responded.history_entry.new_status,
        responded.new_quotation.status.as_str()
    );

    let approved = apply(
        &responded.new_quotation,
        Command::Approve { notes: None },
        create_test_requester(),
        test_now(),
    )
    .unwrap();
    assert_eq!(
        approved.history_entry.previous_status.as_deref(),
        Some("respondida")
    );
    assert_eq!(approved.history_entry.new_status, "aprovada_para_compra");
}
