// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Cotaq quotation system.
//!
//! Handlers translate requests into core commands, enforce authorization
//! server-side on every mutating operation, sequence document uploads
//! before any write, persist atomically, and signal the notification
//! collaborator after commit (fire-and-forget).

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod notify;
mod request_response;
mod storage;
mod upload_policy;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService};
pub use error::{ApiError, translate_core_error, translate_domain_error,
    translate_persistence_error};
pub use handlers::{
    ApiResult, approve_quotation, assign_pending_request, assume_quotation, cancel_pending_request,
    cancel_quotation, conclude_pending_request, create_pending_request, create_quotation,
    delete_pending_request, delete_quotation, edit_items, get_pending_request, get_quotation,
    list_pending_requests, list_quotations, peek_next_pending_number, peek_next_quotation_number,
    pending_history, pending_status_counts, purchase_quotation, quotation_history,
    quotation_status_counts, reject_pending_request, respond_pending_request, respond_quotation,
};
pub use notify::{Notifier, NoopNotifier, StatusChange};
pub use request_response::{
    ApproveQuotationRequest, AssignPendingRequest, AssumeQuotationRequest, CancelPendingRequest,
    CancelQuotationRequest, ConcludePendingRequest, CreatePendingRequest, CreateQuotationRequest,
    DeletePendingResponse, DeleteQuotationResponse, DocumentInfo, DocumentUploadRequest,
    EditItemsRequest, HistoryEntryInfo, ItemInput, ItemResponseInput, LineItemInfo,
    ListPendingRequest, ListQuotationsRequest, PeekNumberResponse, PendingRequestInfo,
    PurchaseQuotationRequest, QuotationInfo, RejectPendingRequest, RespondPendingRequest,
    RespondQuotationRequest, StatusCountsResponse,
};
pub use storage::{BlobStorage, DocumentUpload, UploadError};
pub use upload_policy::{UploadPolicy, UploadPolicyError};
