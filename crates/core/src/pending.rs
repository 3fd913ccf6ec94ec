// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{PendingCommand, PendingDraft};
use crate::error::CoreError;
use crate::format_timestamp;
use crate::state::{PendingCreationResult, PendingTransitionResult};
use cotaq_audit::{Actor, AggregateKind, HistoryEntry};
use cotaq_domain::{
    ActorContext, DomainError, PendingAction, PendingRequest, PendingStatus, authorize_pending,
    validate_pending_fields, validate_rejection_reason,
};
use time::OffsetDateTime;

/// Builds the authorizer input for an actor against a pending request.
fn actor_context(actor: &Actor, request: &PendingRequest) -> ActorContext {
    ActorContext::new(
        actor.role,
        request.requester_id == actor.id,
        request.handler_id.as_deref() == Some(actor.id.as_str()),
    )
}

/// Creates a new pending-registration request from a draft.
///
/// The request starts as `pending`. The id and sequential number are
/// assigned by the persistence layer inside the creation transaction.
///
/// # Arguments
///
/// * `draft` - The creation input
/// * `requester` - The creating actor
/// * `now` - The clock value supplied by the caller
///
/// # Errors
///
/// Returns an error if the part code or description is empty.
pub fn open_pending_request(
    draft: PendingDraft,
    requester: Actor,
    now: OffsetDateTime,
) -> Result<PendingCreationResult, CoreError> {
    validate_pending_fields(&draft.part_code, &draft.description)?;

    let recorded_at: String = format_timestamp(now)?;

    let mut request: PendingRequest = PendingRequest::new(
        draft.part_code,
        draft.description,
        requester.id.clone(),
        recorded_at.clone(),
    );
    request.brand = draft.brand;
    request.notes = draft.notes;
    request.document = draft.document;

    let history_entry: HistoryEntry = HistoryEntry::new(
        AggregateKind::PendingRequest,
        None,
        requester,
        String::from("criada"),
        None,
        request.status.as_str().to_string(),
        None,
        recorded_at,
    );

    Ok(PendingCreationResult {
        request,
        history_entry,
    })
}

/// Applies a command to a pending-registration request.
///
/// Mirrors the quotation `apply`: the authorizer is evaluated for every
/// command, the caller supplies the clock, and exactly one history entry
/// is produced.
///
/// Cancellation here is an overlay: it sets `cancelled` and the reason
/// without touching the underlying `status`, which remains independently
/// inspectable audit information.
///
/// # Arguments
///
/// * `request` - The current request state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `now` - The clock value supplied by the caller
///
/// # Errors
///
/// Returns an error if:
/// - The authorizer denies the action (frozen request, wrong status, or
///   insufficient role)
/// - A domain rule is violated (empty catalog code, missing rejection
///   reason, conclude without a catalog code)
pub fn apply_pending(
    request: &PendingRequest,
    command: PendingCommand,
    actor: Actor,
    now: OffsetDateTime,
) -> Result<PendingTransitionResult, CoreError> {
    let ctx: ActorContext = actor_context(&actor, request);
    let previous: &'static str = request.display_status();
    let recorded_at: String = format_timestamp(now)?;

    let mut new_request: PendingRequest = request.clone();
    new_request.updated_at = recorded_at.clone();

    let (action_tag, notes): (&'static str, Option<String>) = match command {
        PendingCommand::Assign { handler_id } => {
            authorize_pending(request, PendingAction::Assign, ctx)?;

            new_request.handler_id = Some(handler_id);
            new_request.status = PendingStatus::InProgress;
            new_request.assigned_at = Some(recorded_at.clone());
            ("atribuida", None)
        }
        PendingCommand::Respond {
            catalog_code,
            notes,
        } => {
            authorize_pending(request, PendingAction::Respond, ctx)?;

            if catalog_code.trim().is_empty() {
                return Err(CoreError::DomainViolation(DomainError::MissingCatalogCode));
            }

            // Informational action: records the code without moving the
            // status; concluding is a separate, explicit step.
            new_request.catalog_code = Some(catalog_code);
            new_request.responded_at = Some(recorded_at.clone());
            ("respondida", notes)
        }
        PendingCommand::Conclude => {
            authorize_pending(request, PendingAction::Conclude, ctx)?;

            if new_request.catalog_code.is_none() {
                return Err(CoreError::DomainViolation(DomainError::MissingCatalogCode));
            }

            new_request.status = PendingStatus::Completed;
            new_request.concluded_at = Some(recorded_at.clone());
            ("concluida", None)
        }
        PendingCommand::Reject { reason } => {
            authorize_pending(request, PendingAction::Reject, ctx)?;
            validate_rejection_reason(&reason)?;

            new_request.status = PendingStatus::Rejected;
            new_request.rejection_reason = Some(reason.clone());
            ("rejeitada", Some(reason))
        }
        PendingCommand::Cancel { reason } => {
            authorize_pending(request, PendingAction::Cancel, ctx)?;

            new_request.cancelled = true;
            new_request.cancel_reason = reason.clone();
            ("cancelada", reason)
        }
    };

    let history_entry: HistoryEntry = HistoryEntry::new(
        AggregateKind::PendingRequest,
        request.request_id,
        actor,
        action_tag.to_string(),
        Some(previous.to_string()),
        new_request.display_status().to_string(),
        notes,
        recorded_at,
    );

    Ok(PendingTransitionResult {
        new_request,
        history_entry,
    })
}
