// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every mutating handler follows the same pipeline: translate the
//! request, upload documents (abort on failure, before any write), apply
//! the core command (which authorizes), persist atomically, then signal
//! the notifier fire-and-forget.

use time::OffsetDateTime;
use tracing::debug;

use cotaq::{
    Command, CreationResult, ItemDraft, ItemResponse, PendingCommand, PendingCreationResult,
    PendingDraft, PendingTransitionResult, QuotationDraft, TransitionResult, apply, apply_pending,
    open_pending_request, open_quotation,
};
use cotaq_audit::{AggregateKind, HistoryEntry};
use cotaq_domain::{
    DocumentRef, PendingRequest, PendingStatus, Quotation, QuotationStatus, RequestType,
};
use cotaq_persistence::{
    CountScope, PENDING_COUNTER, PendingFilter, Persistence, QUOTATION_COUNTER, QuotationFilter,
};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::notify::{Notifier, StatusChange};
use crate::request_response::{
    ApproveQuotationRequest, AssignPendingRequest, AssumeQuotationRequest, CancelPendingRequest,
    CancelQuotationRequest, ConcludePendingRequest, CreatePendingRequest, CreateQuotationRequest,
    DeletePendingResponse, DeleteQuotationResponse, DocumentUploadRequest, EditItemsRequest,
    HistoryEntryInfo, ItemInput, ItemResponseInput, ListPendingRequest, ListQuotationsRequest,
    PeekNumberResponse, PendingRequestInfo, PurchaseQuotationRequest, QuotationInfo,
    RejectPendingRequest, RespondPendingRequest, RespondQuotationRequest, StatusCountsResponse,
};
use crate::storage::{BlobStorage, DocumentUpload};
use crate::upload_policy::UploadPolicy;

/// The result of a mutating API operation.
///
/// Successful operations always carry the history entry they produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The history entry generated by this operation.
    pub history_entry: HistoryEntry,
}

fn item_draft_from_input(input: ItemInput) -> ItemDraft {
    ItemDraft {
        item_id: input.item_id,
        part_code: input.part_code,
        description: input.description,
        quantity: input.quantity,
        needs_registration: input.needs_registration,
        notes: input.notes,
    }
}

fn item_response_from_input(input: ItemResponseInput) -> ItemResponse {
    ItemResponse {
        item_id: input.item_id,
        unit_price_cents: input.unit_price_cents,
        lead_time: input.lead_time,
        supplier: input.supplier,
        notes: input.notes,
        catalog_code: input.catalog_code,
    }
}

/// Validates and stores one document before anything is written.
///
/// A policy violation or storage failure surfaces as `UploadFailed` and
/// the enclosing operation must abort without partial commit.
fn upload_document(
    storage: &mut dyn BlobStorage,
    request: DocumentUploadRequest,
) -> Result<DocumentRef, ApiError> {
    let upload: DocumentUpload = DocumentUpload {
        file_name: request.file_name.clone(),
        content_type: request.content_type,
        bytes: request.bytes,
    };

    UploadPolicy::default()
        .validate(&upload)
        .map_err(|e| ApiError::UploadFailed {
            message: e.to_string(),
        })?;

    let storage_ref: String = storage
        .store_document(&upload)
        .map_err(|e| ApiError::UploadFailed {
            message: e.to_string(),
        })?;

    Ok(DocumentRef::new(storage_ref, request.file_name))
}

/// Signals a committed status change. Fire-and-forget: the notifier
/// cannot fail the operation.
fn notify_quotation_change(
    notifier: &dyn Notifier,
    quotation: &Quotation,
    entry: &HistoryEntry,
) {
    if let Some(quotation_id) = quotation.quotation_id {
        let change: StatusChange = StatusChange {
            aggregate: AggregateKind::Quotation,
            aggregate_id: quotation_id,
            number: quotation.number,
            previous_status: entry.previous_status.clone(),
            new_status: entry.new_status.clone(),
            requester_id: quotation.requester_id.clone(),
            buyer_id: quotation.buyer_id.clone(),
        };
        debug!(
            quotation_id,
            status = change.new_status.as_str(),
            "Signalling status change"
        );
        notifier.status_changed(&change);
    }
}

fn notify_pending_change(notifier: &dyn Notifier, request: &PendingRequest, entry: &HistoryEntry) {
    if let Some(request_id) = request.request_id {
        let change: StatusChange = StatusChange {
            aggregate: AggregateKind::PendingRequest,
            aggregate_id: request_id,
            number: request.number,
            previous_status: entry.previous_status.clone(),
            new_status: entry.new_status.clone(),
            requester_id: request.requester_id.clone(),
            buyer_id: request.handler_id.clone(),
        };
        debug!(
            request_id,
            status = change.new_status.as_str(),
            "Signalling status change"
        );
        notifier.status_changed(&change);
    }
}

/// Loads, applies, persists, and notifies one quotation command.
fn apply_and_persist(
    persistence: &mut Persistence,
    quotation_id: i64,
    command: Command,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    let quotation: Quotation = persistence
        .get_quotation(quotation_id)
        .map_err(translate_persistence_error)?;

    let result: TransitionResult = apply(
        &quotation,
        command,
        actor.to_audit_actor(),
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    persistence
        .persist_transition(&result)
        .map_err(translate_persistence_error)?;

    notify_quotation_change(notifier, &result.new_quotation, &result.history_entry);

    Ok(ApiResult {
        response: QuotationInfo::from_domain(&result.new_quotation),
        history_entry: result.history_entry,
    })
}

/// Loads, applies, persists, and notifies one pending-registration
/// command.
fn apply_pending_and_persist(
    persistence: &mut Persistence,
    request_id: i64,
    command: PendingCommand,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<PendingRequestInfo>, ApiError> {
    let request: PendingRequest = persistence
        .get_pending_request(request_id)
        .map_err(translate_persistence_error)?;

    let result: PendingTransitionResult = apply_pending(
        &request,
        command,
        actor.to_audit_actor(),
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    persistence
        .persist_pending_transition(&result)
        .map_err(translate_persistence_error)?;

    notify_pending_change(notifier, &result.new_request, &result.history_entry);

    Ok(ApiResult {
        response: PendingRequestInfo::from_domain(&result.new_request),
        history_entry: result.history_entry,
    })
}

// ============================================================================
// Quotation operations
// ============================================================================

/// Creates a quotation via the API boundary.
///
/// The sequential number is allocated inside the creation transaction;
/// any number previously peeked for display is only a hint.
///
/// # Errors
///
/// Returns an error if a field is invalid or persistence fails.
pub fn create_quotation(
    persistence: &mut Persistence,
    request: CreateQuotationRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    let request_type: RequestType =
        RequestType::parse(&request.request_type).map_err(translate_domain_error)?;

    let draft: QuotationDraft = QuotationDraft {
        client_name: request.client_name,
        order_number: request.order_number,
        budget_number: request.budget_number,
        preferred_supplier: request.preferred_supplier,
        request_type,
        notes: request.notes,
        items: request.items.into_iter().map(item_draft_from_input).collect(),
    };

    let creation: CreationResult = open_quotation(
        draft,
        actor.to_audit_actor(),
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let created = persistence
        .create_quotation(&creation)
        .map_err(translate_persistence_error)?;

    let quotation: Quotation = persistence
        .get_quotation(created.quotation_id)
        .map_err(translate_persistence_error)?;

    let history_entry: HistoryEntry = HistoryEntry {
        aggregate_id: Some(created.quotation_id),
        ..creation.history_entry
    };

    notify_quotation_change(notifier, &quotation, &history_entry);

    Ok(ApiResult {
        response: QuotationInfo::from_domain(&quotation),
        history_entry,
    })
}

/// A buyer assumes a quotation (`novo` → `em_cotacao`).
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the status does not
/// admit it, or persistence fails.
pub fn assume_quotation(
    persistence: &mut Persistence,
    request: AssumeQuotationRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    apply_and_persist(
        persistence,
        request.quotation_id,
        Command::Assume,
        actor,
        notifier,
    )
}

/// Records a pricing response, uploading any supplied documents first.
///
/// An upload failure aborts the whole operation: the quotation is never
/// marked responded with a missing or broken attachment.
///
/// # Errors
///
/// Returns an error if an upload fails, the actor is not authorized, a
/// targeted item does not exist, or persistence fails.
pub fn respond_quotation(
    persistence: &mut Persistence,
    storage: &mut dyn BlobStorage,
    request: RespondQuotationRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    // Documents go to blob storage before anything else happens
    let quote_document: Option<DocumentRef> = request
        .quote_document
        .map(|doc| upload_document(storage, doc))
        .transpose()?;
    let proposal_document: Option<DocumentRef> = request
        .proposal_document
        .map(|doc| upload_document(storage, doc))
        .transpose()?;

    let command: Command = Command::Respond {
        responses: request
            .responses
            .into_iter()
            .map(item_response_from_input)
            .collect(),
        notes: request.notes,
        quote_document,
        proposal_document,
    };

    apply_and_persist(persistence, request.quotation_id, command, actor, notifier)
}

/// The requester approves a responded quotation.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the status does not
/// admit it, or persistence fails.
pub fn approve_quotation(
    persistence: &mut Persistence,
    request: ApproveQuotationRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    apply_and_persist(
        persistence,
        request.quotation_id,
        Command::Approve {
            notes: request.notes,
        },
        actor,
        notifier,
    )
}

/// Finalizes the purchase of an approved quotation.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the status does not
/// admit it, items still need catalog registration, or persistence fails.
pub fn purchase_quotation(
    persistence: &mut Persistence,
    request: PurchaseQuotationRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    apply_and_persist(
        persistence,
        request.quotation_id,
        Command::Purchase {
            notes: request.notes,
        },
        actor,
        notifier,
    )
}

/// Cancels a quotation with a mandatory reason.
///
/// # Errors
///
/// Returns an error if the reason is empty, the actor is not authorized,
/// the quotation is already terminal, or persistence fails.
pub fn cancel_quotation(
    persistence: &mut Persistence,
    request: CancelQuotationRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    apply_and_persist(
        persistence,
        request.quotation_id,
        Command::Cancel {
            reason: request.reason,
        },
        actor,
        notifier,
    )
}

/// Upserts and removes line items while the quotation is open.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, an id is unknown, the
/// edit would leave zero items, or persistence fails.
pub fn edit_items(
    persistence: &mut Persistence,
    request: EditItemsRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<QuotationInfo>, ApiError> {
    apply_and_persist(
        persistence,
        request.quotation_id,
        Command::EditItems {
            items: request.items.into_iter().map(item_draft_from_input).collect(),
            remove_item_ids: request.remove_item_ids,
        },
        actor,
        notifier,
    )
}

/// Hard-deletes a quotation, its items, and its history. Admin only.
///
/// Irreversible, in contrast with cancellation.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the quotation does
/// not exist.
pub fn delete_quotation(
    persistence: &mut Persistence,
    quotation_id: i64,
    actor: &AuthenticatedActor,
) -> Result<DeleteQuotationResponse, ApiError> {
    AuthorizationService::authorize_delete(actor)?;

    persistence
        .delete_quotation(quotation_id)
        .map_err(translate_persistence_error)?;

    Ok(DeleteQuotationResponse {
        quotation_id,
        message: format!("Quotation {quotation_id} permanently deleted"),
    })
}

// ============================================================================
// Quotation reads
// ============================================================================

/// Retrieves one quotation.
///
/// # Errors
///
/// Returns an error if the quotation does not exist.
pub fn get_quotation(
    persistence: &mut Persistence,
    quotation_id: i64,
) -> Result<QuotationInfo, ApiError> {
    let quotation: Quotation = persistence
        .get_quotation(quotation_id)
        .map_err(translate_persistence_error)?;
    Ok(QuotationInfo::from_domain(&quotation))
}

/// Retrieves a quotation's history timeline, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn quotation_history(
    persistence: &mut Persistence,
    quotation_id: i64,
) -> Result<Vec<HistoryEntryInfo>, ApiError> {
    let entries = persistence
        .history_for(AggregateKind::Quotation, quotation_id)
        .map_err(translate_persistence_error)?;
    Ok(entries.iter().map(HistoryEntryInfo::from_entry).collect())
}

/// Lists quotations matching a filter.
///
/// Non-procurement actors are always scoped to their own quotations,
/// whatever the request asked for.
///
/// # Errors
///
/// Returns an error if the status string is unknown or a query fails.
pub fn list_quotations(
    persistence: &mut Persistence,
    request: ListQuotationsRequest,
    actor: &AuthenticatedActor,
) -> Result<Vec<QuotationInfo>, ApiError> {
    let status: Option<QuotationStatus> = request
        .status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(translate_domain_error)?;

    let requester_id: Option<String> = if actor.role.is_procurement() {
        request.requester_id
    } else {
        Some(actor.id.clone())
    };

    let filter: QuotationFilter = QuotationFilter {
        status,
        requester_id,
        buyer_id: request.buyer_id,
        search: request.search,
        created_from: request.created_from,
        created_to: request.created_to,
        include_finalized: request.include_finalized,
    };

    let quotations: Vec<Quotation> = persistence
        .list_quotations(&filter)
        .map_err(translate_persistence_error)?;

    Ok(quotations.iter().map(QuotationInfo::from_domain).collect())
}

/// Counts quotations per status.
///
/// Procurement roles see the whole board; everyone else only their own.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn quotation_status_counts(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<StatusCountsResponse, ApiError> {
    let scope: CountScope = if actor.role.is_procurement() {
        CountScope::All
    } else {
        CountScope::Own(actor.id.clone())
    };

    let counts = persistence
        .quotation_status_counts(&scope)
        .map_err(translate_persistence_error)?;

    Ok(StatusCountsResponse { counts })
}

/// Reads the next quotation number for display, without reserving it.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn peek_next_quotation_number(
    persistence: &mut Persistence,
) -> Result<PeekNumberResponse, ApiError> {
    let next_number: i64 = persistence
        .peek_next_number(QUOTATION_COUNTER)
        .map_err(translate_persistence_error)?;
    Ok(PeekNumberResponse { next_number })
}

// ============================================================================
// Pending-registration operations
// ============================================================================

/// Creates a pending-registration request, uploading its document first.
///
/// # Errors
///
/// Returns an error if an upload fails, a field is invalid, or
/// persistence fails.
pub fn create_pending_request(
    persistence: &mut Persistence,
    storage: &mut dyn BlobStorage,
    request: CreatePendingRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<PendingRequestInfo>, ApiError> {
    let document: Option<DocumentRef> = request
        .document
        .map(|doc| upload_document(storage, doc))
        .transpose()?;

    let draft: PendingDraft = PendingDraft {
        part_code: request.part_code,
        description: request.description,
        brand: request.brand,
        notes: request.notes,
        document,
    };

    let creation: PendingCreationResult = open_pending_request(
        draft,
        actor.to_audit_actor(),
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let created = persistence
        .create_pending_request(&creation)
        .map_err(translate_persistence_error)?;

    let pending: PendingRequest = persistence
        .get_pending_request(created.request_id)
        .map_err(translate_persistence_error)?;

    let history_entry: HistoryEntry = HistoryEntry {
        aggregate_id: Some(created.request_id),
        ..creation.history_entry
    };

    notify_pending_change(notifier, &pending, &history_entry);

    Ok(ApiResult {
        response: PendingRequestInfo::from_domain(&pending),
        history_entry,
    })
}

/// Assigns a handler to a pending-registration request.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the status does not
/// admit it, or persistence fails.
pub fn assign_pending_request(
    persistence: &mut Persistence,
    request: AssignPendingRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<PendingRequestInfo>, ApiError> {
    apply_pending_and_persist(
        persistence,
        request.request_id,
        PendingCommand::Assign {
            handler_id: request.handler_id,
        },
        actor,
        notifier,
    )
}

/// Records a catalog code on a pending-registration request.
///
/// Informational: the status is not moved; concluding is separate.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the code is empty, or
/// persistence fails.
pub fn respond_pending_request(
    persistence: &mut Persistence,
    request: RespondPendingRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<PendingRequestInfo>, ApiError> {
    apply_pending_and_persist(
        persistence,
        request.request_id,
        PendingCommand::Respond {
            catalog_code: request.catalog_code,
            notes: request.notes,
        },
        actor,
        notifier,
    )
}

/// Concludes a pending-registration request.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, no catalog code was
/// recorded yet, or persistence fails.
pub fn conclude_pending_request(
    persistence: &mut Persistence,
    request: ConcludePendingRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<PendingRequestInfo>, ApiError> {
    apply_pending_and_persist(
        persistence,
        request.request_id,
        PendingCommand::Conclude,
        actor,
        notifier,
    )
}

/// Rejects a pending-registration request with a mandatory reason.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the reason is empty,
/// or persistence fails.
pub fn reject_pending_request(
    persistence: &mut Persistence,
    request: RejectPendingRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<PendingRequestInfo>, ApiError> {
    apply_pending_and_persist(
        persistence,
        request.request_id,
        PendingCommand::Reject {
            reason: request.reason,
        },
        actor,
        notifier,
    )
}

/// Overlay-cancels a pending-registration request.
///
/// The underlying status is left untouched; display logic shows the
/// request as cancelled from here on.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the request is
/// already frozen, or persistence fails.
pub fn cancel_pending_request(
    persistence: &mut Persistence,
    request: CancelPendingRequest,
    actor: &AuthenticatedActor,
    notifier: &dyn Notifier,
) -> Result<ApiResult<PendingRequestInfo>, ApiError> {
    apply_pending_and_persist(
        persistence,
        request.request_id,
        PendingCommand::Cancel {
            reason: request.reason,
        },
        actor,
        notifier,
    )
}

/// Hard-deletes a pending-registration request and its history. Admin
/// only.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the request does not
/// exist.
pub fn delete_pending_request(
    persistence: &mut Persistence,
    request_id: i64,
    actor: &AuthenticatedActor,
) -> Result<DeletePendingResponse, ApiError> {
    AuthorizationService::authorize_delete(actor)?;

    persistence
        .delete_pending_request(request_id)
        .map_err(translate_persistence_error)?;

    Ok(DeletePendingResponse {
        request_id,
        message: format!("Pending-registration request {request_id} permanently deleted"),
    })
}

// ============================================================================
// Pending-registration reads
// ============================================================================

/// Retrieves one pending-registration request.
///
/// # Errors
///
/// Returns an error if the request does not exist.
pub fn get_pending_request(
    persistence: &mut Persistence,
    request_id: i64,
) -> Result<PendingRequestInfo, ApiError> {
    let request: PendingRequest = persistence
        .get_pending_request(request_id)
        .map_err(translate_persistence_error)?;
    Ok(PendingRequestInfo::from_domain(&request))
}

/// Retrieves a pending-registration request's history timeline.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn pending_history(
    persistence: &mut Persistence,
    request_id: i64,
) -> Result<Vec<HistoryEntryInfo>, ApiError> {
    let entries = persistence
        .history_for(AggregateKind::PendingRequest, request_id)
        .map_err(translate_persistence_error)?;
    Ok(entries.iter().map(HistoryEntryInfo::from_entry).collect())
}

/// Lists pending-registration requests matching a filter.
///
/// Non-procurement actors are always scoped to their own requests,
/// whatever the request asked for.
///
/// # Errors
///
/// Returns an error if the status string is unknown or a query fails.
pub fn list_pending_requests(
    persistence: &mut Persistence,
    request: ListPendingRequest,
    actor: &AuthenticatedActor,
) -> Result<Vec<PendingRequestInfo>, ApiError> {
    let status: Option<PendingStatus> = request
        .status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(translate_domain_error)?;

    let requester_id: Option<String> = if actor.role.is_procurement() {
        request.requester_id
    } else {
        Some(actor.id.clone())
    };

    let filter: PendingFilter = PendingFilter {
        status,
        requester_id,
    };

    let requests: Vec<PendingRequest> = persistence
        .list_pending_requests(&filter)
        .map_err(translate_persistence_error)?;

    Ok(requests.iter().map(PendingRequestInfo::from_domain).collect())
}

/// Counts pending-registration requests per displayed status.
///
/// Procurement roles see all requests; everyone else only their own,
/// matching the ownership scoping the authorizer applies.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn pending_status_counts(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<StatusCountsResponse, ApiError> {
    let scope: CountScope = if actor.role.is_procurement() {
        CountScope::All
    } else {
        CountScope::Own(actor.id.clone())
    };

    let counts = persistence
        .pending_status_counts(&scope)
        .map_err(translate_persistence_error)?;

    Ok(StatusCountsResponse { counts })
}

/// Reads the next pending-registration number for display, without
/// reserving it.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn peek_next_pending_number(
    persistence: &mut Persistence,
) -> Result<PeekNumberResponse, ApiError> {
    let next_number: i64 = persistence
        .peek_next_number(PENDING_COUNTER)
        .map_err(translate_persistence_error)?;
    Ok(PeekNumberResponse { next_number })
}
