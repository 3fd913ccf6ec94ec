// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the status machines and value types.

use crate::{
    DomainError, LineItem, PendingRequest, PendingStatus, QuotationStatus, RequestType, Role,
    compute_line_total,
};
use std::str::FromStr;

// ============================================================================
// Quotation Status Machine Tests
// ============================================================================

#[test]
fn test_quotation_status_string_round_trip() {
    let all: [QuotationStatus; 6] = [
        QuotationStatus::Novo,
        QuotationStatus::EmCotacao,
        QuotationStatus::Respondida,
        QuotationStatus::AprovadaParaCompra,
        QuotationStatus::Comprada,
        QuotationStatus::Cancelada,
    ];

    for status in all {
        let parsed: QuotationStatus =
            QuotationStatus::from_str(status.as_str()).expect("round trip must parse");
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_quotation_status_rejects_unknown_string() {
    let result = QuotationStatus::from_str("aguardando");

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidStatus(_)
    ));
}

#[test]
fn test_quotation_status_forward_transitions() {
    assert!(QuotationStatus::Novo.can_transition_to(QuotationStatus::EmCotacao));
    assert!(QuotationStatus::Novo.can_transition_to(QuotationStatus::Respondida));
    assert!(QuotationStatus::EmCotacao.can_transition_to(QuotationStatus::Respondida));
    assert!(QuotationStatus::Respondida.can_transition_to(QuotationStatus::AprovadaParaCompra));
    assert!(QuotationStatus::AprovadaParaCompra.can_transition_to(QuotationStatus::Comprada));
}

#[test]
fn test_quotation_status_rejects_skipping_states() {
    assert!(!QuotationStatus::Novo.can_transition_to(QuotationStatus::AprovadaParaCompra));
    assert!(!QuotationStatus::Novo.can_transition_to(QuotationStatus::Comprada));
    assert!(!QuotationStatus::EmCotacao.can_transition_to(QuotationStatus::AprovadaParaCompra));
    assert!(!QuotationStatus::Respondida.can_transition_to(QuotationStatus::Comprada));
}

#[test]
fn test_quotation_status_any_non_terminal_can_cancel() {
    assert!(QuotationStatus::Novo.can_transition_to(QuotationStatus::Cancelada));
    assert!(QuotationStatus::EmCotacao.can_transition_to(QuotationStatus::Cancelada));
    assert!(QuotationStatus::Respondida.can_transition_to(QuotationStatus::Cancelada));
    assert!(QuotationStatus::AprovadaParaCompra.can_transition_to(QuotationStatus::Cancelada));
}

#[test]
fn test_quotation_terminal_statuses_are_sinks() {
    let targets: [QuotationStatus; 6] = [
        QuotationStatus::Novo,
        QuotationStatus::EmCotacao,
        QuotationStatus::Respondida,
        QuotationStatus::AprovadaParaCompra,
        QuotationStatus::Comprada,
        QuotationStatus::Cancelada,
    ];

    for target in targets {
        assert!(!QuotationStatus::Comprada.can_transition_to(target));
        assert!(!QuotationStatus::Cancelada.can_transition_to(target));
    }

    assert!(QuotationStatus::Comprada.is_terminal());
    assert!(QuotationStatus::Cancelada.is_terminal());
    assert!(!QuotationStatus::Respondida.is_terminal());
}

// ============================================================================
// Pending Status Tests
// ============================================================================

#[test]
fn test_pending_status_string_round_trip() {
    let all: [PendingStatus; 4] = [
        PendingStatus::Pending,
        PendingStatus::InProgress,
        PendingStatus::Completed,
        PendingStatus::Rejected,
    ];

    for status in all {
        let parsed: PendingStatus =
            PendingStatus::from_str(status.as_str()).expect("round trip must parse");
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_pending_terminal_statuses() {
    assert!(PendingStatus::Completed.is_terminal());
    assert!(PendingStatus::Rejected.is_terminal());
    assert!(!PendingStatus::Pending.is_terminal());
    assert!(!PendingStatus::InProgress.is_terminal());
}

#[test]
fn test_pending_display_status_prefers_overlay() {
    let mut request: PendingRequest = PendingRequest::new(
        String::from("PC-100"),
        String::from("Hydraulic seal"),
        String::from("user-1"),
        String::from("2026-01-01T00:00:00Z"),
    );

    assert_eq!(request.display_status(), "pending");

    request.status = PendingStatus::InProgress;
    request.cancelled = true;
    request.cancel_reason = Some(String::from("duplicate"));

    // Overlay wins for display; the underlying status stays inspectable
    assert_eq!(request.display_status(), "cancelled");
    assert_eq!(request.status, PendingStatus::InProgress);
    assert!(request.is_frozen());
}

// ============================================================================
// Role & Request Type Tests
// ============================================================================

#[test]
fn test_role_parsing_is_closed() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("compras").unwrap(), Role::Compras);
    assert_eq!(Role::from_str("gerente").unwrap(), Role::Gerente);
    assert_eq!(Role::from_str("vendedor").unwrap(), Role::Vendedor);

    let result = Role::from_str("Admin");
    assert!(matches!(result.unwrap_err(), DomainError::InvalidRole(_)));
}

#[test]
fn test_procurement_roles() {
    assert!(Role::Admin.is_procurement());
    assert!(Role::Compras.is_procurement());
    assert!(Role::Gerente.is_procurement());
    assert!(!Role::Vendedor.is_procurement());
}

#[test]
fn test_request_type_parsing() {
    assert_eq!(RequestType::parse("quote").unwrap(), RequestType::Quote);
    assert_eq!(
        RequestType::parse("technical_spec").unwrap(),
        RequestType::TechnicalSpec
    );
    assert_eq!(RequestType::parse("both").unwrap(), RequestType::Both);

    let result = RequestType::parse("spec");
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidRequestType(_)
    ));
}

// ============================================================================
// Line Total Tests
// ============================================================================

#[test]
fn test_line_total_is_quantity_times_unit_price() {
    assert_eq!(compute_line_total(3, 1000).unwrap(), 3000);
    assert_eq!(compute_line_total(1, 0).unwrap(), 0);
}

#[test]
fn test_line_total_rejects_negative_price() {
    let result = compute_line_total(2, -50);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidUnitPrice {
            unit_price_cents: -50
        }
    ));
}

#[test]
fn test_line_total_detects_overflow() {
    let result = compute_line_total(u32::MAX, i64::MAX);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::PriceOverflow { .. }
    ));
}

#[test]
fn test_set_unit_price_keeps_total_consistent() {
    let mut item: LineItem = LineItem::new(
        String::from("PC-1"),
        String::from("Bearing"),
        4,
        false,
    );
    assert_eq!(item.unit_price_cents, None);
    assert_eq!(item.total_price_cents, None);

    item.set_unit_price(250).unwrap();
    assert_eq!(item.unit_price_cents, Some(250));
    assert_eq!(item.total_price_cents, Some(1000));

    // A quantity edit must never leave a stale total behind
    item.quantity = 2;
    item.recompute_total().unwrap();
    assert_eq!(item.total_price_cents, Some(500));
}

#[test]
fn test_awaits_registration() {
    let mut item: LineItem = LineItem::new(
        String::from("PC-2"),
        String::from("Custom gasket"),
        1,
        true,
    );
    assert!(item.awaits_registration());

    item.catalog_code = Some(String::from("SK-1234"));
    assert!(!item.awaits_registration());
}
