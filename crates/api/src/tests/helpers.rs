// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::cell::RefCell;

use cotaq_domain::Role;
use cotaq_persistence::Persistence;

use crate::notify::{Notifier, StatusChange};
use crate::request_response::{
    CreatePendingRequest, CreateQuotationRequest, DocumentUploadRequest, ItemInput, QuotationInfo,
};
use crate::storage::{BlobStorage, DocumentUpload, UploadError};
use crate::{AuthenticatedActor, NoopNotifier, create_quotation};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-1"), Role::Admin)
}

pub fn create_test_buyer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("comp-1"), Role::Compras)
}

pub fn create_test_requester() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("vend-1"), Role::Vendedor)
}

/// A vendedor who did not create any of the fixtures.
pub fn create_test_outsider() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("vend-9"), Role::Vendedor)
}

pub fn new_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database must initialize")
}

pub fn item_input(part_code: &str, quantity: u32) -> ItemInput {
    ItemInput {
        item_id: None,
        part_code: String::from(part_code),
        description: format!("{part_code} description"),
        quantity,
        needs_registration: false,
        notes: None,
    }
}

pub fn create_request(client_name: &str) -> CreateQuotationRequest {
    CreateQuotationRequest {
        client_name: String::from(client_name),
        order_number: None,
        budget_number: None,
        preferred_supplier: None,
        request_type: String::from("quote"),
        notes: None,
        items: vec![item_input("PC-1", 3), item_input("PC-2", 1)],
    }
}

pub fn create_pending_body(part_code: &str) -> CreatePendingRequest {
    CreatePendingRequest {
        part_code: String::from(part_code),
        description: format!("{part_code} description"),
        brand: None,
        notes: None,
        document: None,
    }
}

pub fn pdf_upload(file_name: &str) -> DocumentUploadRequest {
    DocumentUploadRequest {
        file_name: String::from(file_name),
        content_type: String::from("application/pdf"),
        bytes: vec![0x25, 0x50, 0x44, 0x46],
    }
}

/// Creates a quotation through the handler as the test requester.
pub fn created_quotation(persistence: &mut Persistence, client_name: &str) -> QuotationInfo {
    create_quotation(
        persistence,
        create_request(client_name),
        &create_test_requester(),
        &NoopNotifier,
    )
    .expect("creation must succeed")
    .response
}

/// Blob storage test double: remembers uploads, optionally fails.
pub struct MemoryBlobStorage {
    pub stored: Vec<String>,
    pub fail: bool,
}

impl MemoryBlobStorage {
    pub const fn new() -> Self {
        Self {
            stored: Vec::new(),
            fail: false,
        }
    }

    pub const fn failing() -> Self {
        Self {
            stored: Vec::new(),
            fail: true,
        }
    }
}

impl BlobStorage for MemoryBlobStorage {
    fn store_document(&mut self, upload: &DocumentUpload) -> Result<String, UploadError> {
        if self.fail {
            return Err(UploadError::TransportFailed {
                reason: String::from("simulated outage"),
            });
        }
        let storage_ref: String = format!("blob://test/{}", self.stored.len());
        self.stored.push(upload.file_name.clone());
        Ok(storage_ref)
    }
}

/// Notifier test double: records every signalled change.
pub struct RecordingNotifier {
    pub changes: RefCell<Vec<StatusChange>>,
}

impl RecordingNotifier {
    pub const fn new() -> Self {
        Self {
            changes: RefCell::new(Vec::new()),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn status_changed(&self, change: &StatusChange) {
        self.changes.borrow_mut().push(change.clone());
    }
}
