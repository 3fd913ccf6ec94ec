// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for sequence allocation, the non-reserving peek, and the
//! backfill migration.

use std::collections::HashSet;

use crate::tests::helpers::{creation_result, insert_legacy_quotation};
use crate::{Persistence, QUOTATION_COUNTER, QuotationFilter};

#[test]
fn test_numbers_are_sequential_and_unique() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let first = persistence
        .create_quotation(&creation_result("Acme Mining"))
        .unwrap();
    let second = persistence
        .create_quotation(&creation_result("Beta Metals"))
        .unwrap();
    let third = persistence
        .create_quotation(&creation_result("Gamma Pulp"))
        .unwrap();

    assert_eq!(first.number, 1);
    assert_eq!(second.number, 2);
    assert_eq!(third.number, 3);

    let numbers: HashSet<i64> = [first.number, second.number, third.number]
        .into_iter()
        .collect();
    assert_eq!(numbers.len(), 3);
}

#[test]
fn test_peek_does_not_reserve() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let peek_one: i64 = persistence.peek_next_number(QUOTATION_COUNTER).unwrap();
    let peek_two: i64 = persistence.peek_next_number(QUOTATION_COUNTER).unwrap();

    // Peeking twice shows the same value; nothing was consumed
    assert_eq!(peek_one, 1);
    assert_eq!(peek_two, 1);

    let created = persistence
        .create_quotation(&creation_result("Acme Mining"))
        .unwrap();
    assert_eq!(created.number, 1);

    assert_eq!(persistence.peek_next_number(QUOTATION_COUNTER).unwrap(), 2);
}

#[test]
fn test_unknown_counter_is_rejected() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.peek_next_number("nonexistent");

    assert!(matches!(
        result.unwrap_err(),
        crate::PersistenceError::CounterNotFound(_)
    ));
}

#[test]
fn test_backfill_assigns_only_missing_numbers() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let numbered = persistence
        .create_quotation(&creation_result("Acme Mining"))
        .unwrap();
    let legacy_a: i64 = insert_legacy_quotation(&mut persistence, "Legacy A");
    let legacy_b: i64 = insert_legacy_quotation(&mut persistence, "Legacy B");

    let migrated: usize = persistence.backfill_quotation_numbers().unwrap();
    assert_eq!(migrated, 2);

    let first = persistence.get_quotation(legacy_a).unwrap();
    let second = persistence.get_quotation(legacy_b).unwrap();
    assert_eq!(first.number, Some(2));
    assert_eq!(second.number, Some(3));

    // The already-numbered row is untouched
    let untouched = persistence.get_quotation(numbered.quotation_id).unwrap();
    assert_eq!(untouched.number, Some(numbered.number));
}

#[test]
fn test_backfill_is_idempotent() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    insert_legacy_quotation(&mut persistence, "Legacy A");
    insert_legacy_quotation(&mut persistence, "Legacy B");

    let first_run: usize = persistence.backfill_quotation_numbers().unwrap();
    let second_run: usize = persistence.backfill_quotation_numbers().unwrap();

    assert_eq!(first_run, 2);
    assert_eq!(second_run, 0);

    // Numbers stay unique across both runs
    let all = persistence
        .list_quotations(&QuotationFilter {
            include_finalized: true,
            ..QuotationFilter::default()
        })
        .unwrap();
    let numbers: HashSet<i64> = all
        .iter()
        .map(|quotation| quotation.number.expect("backfilled"))
        .collect();
    assert_eq!(numbers.len(), all.len());
}

#[test]
fn test_allocation_never_reuses_a_backfilled_number() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    insert_legacy_quotation(&mut persistence, "Legacy A");
    persistence.backfill_quotation_numbers().unwrap();

    // The counter was raised by the backfill, so the next creation gets a
    // fresh number
    let created = persistence
        .create_quotation(&creation_result("Acme Mining"))
        .unwrap();
    assert_eq!(created.number, 2);
}
