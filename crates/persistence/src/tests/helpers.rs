// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use time::OffsetDateTime;
use time::macros::datetime;

use cotaq::{
    CreationResult, ItemDraft, PendingCreationResult, PendingDraft, QuotationDraft,
    open_pending_request, open_quotation,
};
use cotaq_audit::Actor;
use cotaq_domain::{RequestType, Role};

use crate::Persistence;
use crate::diesel_schema::quotations;

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-02-01 12:00:00 UTC)
}

pub fn requester() -> Actor {
    Actor::new(String::from("vend-1"), Role::Vendedor)
}

pub fn buyer() -> Actor {
    Actor::new(String::from("comp-1"), Role::Compras)
}

pub fn item_draft(part_code: &str, quantity: u32) -> ItemDraft {
    ItemDraft {
        item_id: None,
        part_code: String::from(part_code),
        description: format!("{part_code} description"),
        quantity,
        needs_registration: false,
        notes: None,
    }
}

pub fn quotation_draft(client_name: &str) -> QuotationDraft {
    QuotationDraft {
        client_name: String::from(client_name),
        order_number: Some(String::from("OC-2026-01")),
        budget_number: None,
        preferred_supplier: None,
        request_type: RequestType::Quote,
        notes: None,
        items: vec![item_draft("PC-1", 3), item_draft("PC-2", 1)],
    }
}

pub fn creation_result(client_name: &str) -> CreationResult {
    open_quotation(quotation_draft(client_name), requester(), test_now())
        .expect("creation must succeed")
}

pub fn pending_creation_result(part_code: &str) -> PendingCreationResult {
    let draft: PendingDraft = PendingDraft {
        part_code: String::from(part_code),
        description: format!("{part_code} description"),
        brand: None,
        notes: None,
        document: None,
    };
    open_pending_request(draft, requester(), test_now()).expect("creation must succeed")
}

/// Inserts a quotation row without a sequential number, simulating a
/// legacy row that predates the allocator.
pub fn insert_legacy_quotation(persistence: &mut Persistence, client_name: &str) -> i64 {
    diesel::insert_into(quotations::table)
        .values((
            quotations::client_name.eq(client_name),
            quotations::requester_id.eq("vend-legacy"),
            quotations::request_type.eq("quote"),
            quotations::status.eq("novo"),
            quotations::created_at.eq("2024-06-01T00:00:00Z"),
            quotations::updated_at.eq("2024-06-01T00:00:00Z"),
        ))
        .execute(&mut persistence.conn)
        .expect("legacy insert must succeed");

    crate::sqlite::get_last_insert_rowid(&mut persistence.conn)
        .expect("rowid lookup must succeed")
}
