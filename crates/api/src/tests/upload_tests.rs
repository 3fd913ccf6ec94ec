// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the upload sequencing rule: documents are stored before any
//! write, and a failed upload aborts the whole operation.

use cotaq_persistence::Persistence;

use crate::request_response::{DocumentUploadRequest, QuotationInfo, RespondQuotationRequest};
use crate::tests::helpers::{
    MemoryBlobStorage, create_test_buyer, created_quotation, new_persistence, pdf_upload,
};
use crate::{ApiError, NoopNotifier, get_quotation, respond_quotation};

fn respond_with_document(
    quotation: &QuotationInfo,
    document: DocumentUploadRequest,
) -> RespondQuotationRequest {
    RespondQuotationRequest {
        quotation_id: quotation.quotation_id.unwrap(),
        responses: Vec::new(),
        notes: None,
        quote_document: Some(document),
        proposal_document: None,
    }
}

#[test]
fn test_respond_stores_document_and_keeps_reference() {
    let mut persistence: Persistence = new_persistence();
    let quotation: QuotationInfo = created_quotation(&mut persistence, "Acme Mining");
    let mut storage: MemoryBlobStorage = MemoryBlobStorage::new();

    let responded = respond_quotation(
        &mut persistence,
        &mut storage,
        respond_with_document(&quotation, pdf_upload("quote.pdf")),
        &create_test_buyer(),
        &NoopNotifier,
    )
    .unwrap();

    assert_eq!(storage.stored, vec![String::from("quote.pdf")]);

    let document = responded.response.quote_document.unwrap();
    assert_eq!(document.display_name, "quote.pdf");
    assert_eq!(document.storage_ref, "blob://test/0");

    // The reference survives the round trip
    let reloaded = get_quotation(&mut persistence, quotation.quotation_id.unwrap()).unwrap();
    assert_eq!(
        reloaded.quote_document.unwrap().storage_ref,
        "blob://test/0"
    );
}

#[test]
fn test_upload_failure_aborts_without_partial_commit() {
    let mut persistence: Persistence = new_persistence();
    let quotation: QuotationInfo = created_quotation(&mut persistence, "Acme Mining");
    let mut storage: MemoryBlobStorage = MemoryBlobStorage::failing();

    let result = respond_quotation(
        &mut persistence,
        &mut storage,
        respond_with_document(&quotation, pdf_upload("quote.pdf")),
        &create_test_buyer(),
        &NoopNotifier,
    );

    assert!(matches!(result.unwrap_err(), ApiError::UploadFailed { .. }));

    // The quotation was never marked responded
    let unchanged = get_quotation(&mut persistence, quotation.quotation_id.unwrap()).unwrap();
    assert_eq!(unchanged.status, "novo");
    assert!(unchanged.quote_document.is_none());
    assert!(unchanged.responded_at.is_none());
}

#[test]
fn test_policy_rejects_wrong_format() {
    let mut persistence: Persistence = new_persistence();
    let quotation: QuotationInfo = created_quotation(&mut persistence, "Acme Mining");
    let mut storage: MemoryBlobStorage = MemoryBlobStorage::new();

    let result = respond_quotation(
        &mut persistence,
        &mut storage,
        respond_with_document(&quotation, pdf_upload("quote.xlsx")),
        &create_test_buyer(),
        &NoopNotifier,
    );

    assert!(matches!(result.unwrap_err(), ApiError::UploadFailed { .. }));
    // Rejected before the collaborator was ever called
    assert!(storage.stored.is_empty());
}

#[test]
fn test_policy_rejects_oversized_document() {
    let mut persistence: Persistence = new_persistence();
    let quotation: QuotationInfo = created_quotation(&mut persistence, "Acme Mining");
    let mut storage: MemoryBlobStorage = MemoryBlobStorage::new();

    let mut oversized: DocumentUploadRequest = pdf_upload("quote.pdf");
    oversized.bytes = vec![0; 10 * 1024 * 1024 + 1];

    let result = respond_quotation(
        &mut persistence,
        &mut storage,
        respond_with_document(&quotation, oversized),
        &create_test_buyer(),
        &NoopNotifier,
    );

    assert!(matches!(result.unwrap_err(), ApiError::UploadFailed { .. }));
    assert!(storage.stored.is_empty());
}
