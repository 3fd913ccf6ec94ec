// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod pending;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, open_quotation};
pub use command::{Command, ItemDraft, ItemResponse, PendingCommand, PendingDraft, QuotationDraft};
pub use error::CoreError;
pub use pending::{apply_pending, open_pending_request};
pub use state::{CreationResult, PendingCreationResult, PendingTransitionResult, TransitionResult};

use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

/// Formats a transition timestamp as ISO 8601.
///
/// All timestamps at rest are ISO 8601 strings; the caller supplies the
/// clock so the transition functions stay pure.
///
/// # Errors
///
/// Returns `CoreError::Internal` if formatting fails.
pub(crate) fn format_timestamp(now: OffsetDateTime) -> Result<String, CoreError> {
    now.format(&Iso8601::DEFAULT)
        .map_err(|e| CoreError::Internal(format!("Failed to format timestamp: {e}")))
}
