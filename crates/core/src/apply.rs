// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, ItemDraft, ItemResponse, QuotationDraft};
use crate::error::CoreError;
use crate::format_timestamp;
use crate::state::{CreationResult, TransitionResult};
use cotaq_audit::{Actor, AggregateKind, HistoryEntry};
use cotaq_domain::{
    ActorContext, DomainError, LineItem, Quotation, QuotationAction, QuotationStatus,
    authorize_quotation, validate_cancel_reason, validate_quotation_fields,
};
use time::OffsetDateTime;

/// Builds the authorizer input for an actor against a quotation.
fn actor_context(actor: &Actor, quotation: &Quotation) -> ActorContext {
    ActorContext::new(
        actor.role,
        quotation.requester_id == actor.id,
        quotation.buyer_id.as_deref() == Some(actor.id.as_str()),
    )
}

/// Builds a line item from a draft.
fn item_from_draft(draft: ItemDraft) -> LineItem {
    let mut item: LineItem = LineItem::new(
        draft.part_code,
        draft.description,
        draft.quantity,
        draft.needs_registration,
    );
    item.item_id = draft.item_id;
    item.notes = draft.notes;
    item
}

/// Creates a new quotation from a draft, producing the aggregate and its
/// creation history entry.
///
/// The quotation starts as `novo` with unpriced items. The id and
/// sequential number are assigned by the persistence layer inside the
/// creation transaction; a displayed peek is never carried over.
///
/// # Arguments
///
/// * `draft` - The creation input
/// * `requester` - The creating actor
/// * `now` - The clock value supplied by the caller
///
/// # Returns
///
/// * `Ok(CreationResult)` containing the new quotation and history entry
/// * `Err(CoreError)` if a field is invalid
///
/// # Errors
///
/// Returns an error if the client name is empty, the item list is empty,
/// or any line item is invalid.
pub fn open_quotation(
    draft: QuotationDraft,
    requester: Actor,
    now: OffsetDateTime,
) -> Result<CreationResult, CoreError> {
    let items: Vec<LineItem> = draft.items.into_iter().map(item_from_draft).collect();
    validate_quotation_fields(&draft.client_name, &items)?;

    let recorded_at: String = format_timestamp(now)?;

    let mut quotation: Quotation = Quotation::new(
        draft.client_name,
        requester.id.clone(),
        draft.request_type,
        items,
        recorded_at.clone(),
    );
    quotation.order_number = draft.order_number;
    quotation.budget_number = draft.budget_number;
    quotation.preferred_supplier = draft.preferred_supplier;
    quotation.notes = draft.notes;

    let history_entry: HistoryEntry = HistoryEntry::new(
        AggregateKind::Quotation,
        None,
        requester,
        String::from("criada"),
        None,
        quotation.status.as_str().to_string(),
        None,
        recorded_at,
    );

    Ok(CreationResult {
        quotation,
        history_entry,
    })
}

/// Applies a command to a quotation, producing the new state and exactly
/// one history entry.
///
/// The authorizer is evaluated here, authoritatively, for every command;
/// UI-side gating is never trusted. The function is pure: the caller
/// supplies the clock and persists the result atomically.
///
/// # Arguments
///
/// * `quotation` - The current quotation state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `now` - The clock value supplied by the caller
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and history entry
/// * `Err(CoreError)` if the command is denied or invalid
///
/// # Errors
///
/// Returns an error if:
/// - The authorizer denies the action for this role/state combination
/// - A domain rule is violated (validation, unknown item id, zero-item
///   edit result, unregistered items on purchase)
#[allow(clippy::too_many_lines)]
pub fn apply(
    quotation: &Quotation,
    command: Command,
    actor: Actor,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let ctx: ActorContext = actor_context(&actor, quotation);
    let previous: QuotationStatus = quotation.status;
    let recorded_at: String = format_timestamp(now)?;

    let mut new_quotation: Quotation = quotation.clone();
    new_quotation.updated_at = recorded_at.clone();

    let (action_tag, notes): (&'static str, Option<String>) = match command {
        Command::Assume => {
            authorize_quotation(previous, QuotationAction::Assume, ctx)?;

            new_quotation.buyer_id = Some(actor.id.clone());
            new_quotation.status = QuotationStatus::EmCotacao;
            ("assumida", None)
        }
        Command::Respond {
            responses,
            notes,
            quote_document,
            proposal_document,
        } => {
            authorize_quotation(previous, QuotationAction::Respond, ctx)?;

            apply_item_responses(&mut new_quotation, responses)?;

            // Documents were persisted by the storage collaborator before
            // this command was built; a failed upload never reaches here.
            if quote_document.is_some() {
                new_quotation.quote_document = quote_document;
            }
            if proposal_document.is_some() {
                new_quotation.proposal_document = proposal_document;
            }

            if new_quotation.buyer_id.is_none() {
                new_quotation.buyer_id = Some(actor.id.clone());
            }
            new_quotation.status = QuotationStatus::Respondida;
            new_quotation.responded_at = Some(recorded_at.clone());
            ("respondida", notes)
        }
        Command::Approve { notes } => {
            authorize_quotation(previous, QuotationAction::Approve, ctx)?;

            new_quotation.status = QuotationStatus::AprovadaParaCompra;
            new_quotation.approved_at = Some(recorded_at.clone());
            ("aprovada", notes)
        }
        Command::Purchase { notes } => {
            authorize_quotation(previous, QuotationAction::Purchase, ctx)?;

            let unregistered: usize = new_quotation.unregistered_items().len();
            if unregistered > 0 {
                return Err(CoreError::DomainViolation(DomainError::UnregisteredItems {
                    count: unregistered,
                }));
            }

            new_quotation.status = QuotationStatus::Comprada;
            new_quotation.purchased_at = Some(recorded_at.clone());
            ("comprada", notes)
        }
        Command::Cancel { reason } => {
            authorize_quotation(previous, QuotationAction::Cancel, ctx)?;
            validate_cancel_reason(&reason)?;

            new_quotation.status = QuotationStatus::Cancelada;
            new_quotation.cancelled_at = Some(recorded_at.clone());
            new_quotation.cancel_reason = Some(reason.clone());
            ("cancelada", Some(reason))
        }
        Command::EditItems {
            items,
            remove_item_ids,
        } => {
            authorize_quotation(previous, QuotationAction::Edit, ctx)?;

            edit_items(&mut new_quotation, items, remove_item_ids)?;
            ("itens_editados", None)
        }
    };

    let history_entry: HistoryEntry = HistoryEntry::new(
        AggregateKind::Quotation,
        quotation.quotation_id,
        actor,
        action_tag.to_string(),
        Some(previous.as_str().to_string()),
        new_quotation.status.as_str().to_string(),
        notes,
        recorded_at,
    );

    Ok(TransitionResult {
        new_quotation,
        history_entry,
    })
}

/// Applies per-item pricing responses.
///
/// Partial responses are allowed: items not listed keep their current
/// values, and within a listed item only the supplied fields change. The
/// derived total is recomputed wherever a unit price arrives.
fn apply_item_responses(
    quotation: &mut Quotation,
    responses: Vec<ItemResponse>,
) -> Result<(), CoreError> {
    for response in responses {
        let item: &mut LineItem = quotation
            .find_item_mut(response.item_id)
            .ok_or(DomainError::ItemNotFound {
                item_id: response.item_id,
            })?;

        if let Some(unit_price_cents) = response.unit_price_cents {
            item.set_unit_price(unit_price_cents)?;
        }
        if response.lead_time.is_some() {
            item.lead_time = response.lead_time;
        }
        if response.supplier.is_some() {
            item.supplier = response.supplier;
        }
        if response.notes.is_some() {
            item.notes = response.notes;
        }
        if response.catalog_code.is_some() {
            item.catalog_code = response.catalog_code;
        }
    }
    Ok(())
}

/// Upserts and removes line items.
///
/// Drafts with an id update in place; drafts without an id insert. An
/// unknown id on either side is rejected before any write, and an edit
/// that would leave zero items is refused.
fn edit_items(
    quotation: &mut Quotation,
    items: Vec<ItemDraft>,
    remove_item_ids: Vec<i64>,
) -> Result<(), CoreError> {
    for draft in items {
        match draft.item_id {
            Some(item_id) => {
                let item: &mut LineItem = quotation
                    .find_item_mut(item_id)
                    .ok_or(DomainError::ItemNotFound { item_id })?;
                item.part_code = draft.part_code;
                item.description = draft.description;
                item.quantity = draft.quantity;
                item.needs_registration = draft.needs_registration;
                item.notes = draft.notes;
                item.recompute_total()?;
            }
            None => {
                quotation.items.push(item_from_draft(draft));
            }
        }
    }

    for item_id in remove_item_ids {
        if quotation.find_item(item_id).is_none() {
            return Err(CoreError::DomainViolation(DomainError::ItemNotFound {
                item_id,
            }));
        }
        quotation.items.retain(|item| item.item_id != Some(item_id));
    }

    // The ≥1-item invariant and per-item field rules, re-checked as a whole
    validate_quotation_fields(&quotation.client_name, &quotation.items)?;

    Ok(())
}
