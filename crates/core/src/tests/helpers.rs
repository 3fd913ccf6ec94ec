// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CreationResult, ItemDraft, QuotationDraft, open_quotation};
use cotaq_audit::Actor;
use cotaq_domain::{Quotation, RequestType, Role};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-02-01 12:00:00 UTC)
}

pub fn create_test_requester() -> Actor {
    Actor::new(String::from("vend-1"), Role::Vendedor)
}

pub fn create_test_buyer() -> Actor {
    Actor::new(String::from("comp-1"), Role::Compras)
}

pub fn create_test_admin() -> Actor {
    Actor::new(String::from("admin-1"), Role::Admin)
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

pub fn two_item_draft() -> QuotationDraft {
    QuotationDraft {
        client_name: String::from("Acme Mining"),
        order_number: None,
        budget_number: None,
        preferred_supplier: None,
        request_type: RequestType::Quote,
        notes: None,
        items: vec![item_draft("PC-1", 3), item_draft("PC-2", 1)],
    }
}

/// Opens a quotation and simulates the ids the persistence layer would
/// assign inside the creation transaction.
pub fn persisted_quotation() -> Quotation {
    let result: CreationResult =
        open_quotation(two_item_draft(), create_test_requester(), test_now())
            .expect("creation must succeed");
    let mut quotation: Quotation = result.quotation;
    quotation.quotation_id = Some(1);
    quotation.number = Some(100);
    for (index, item) in quotation.items.iter_mut().enumerate() {
        item.item_id = Some(i64::try_from(index).unwrap() + 1);
    }
    quotation
}
