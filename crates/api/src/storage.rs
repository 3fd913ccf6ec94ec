// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The blob storage collaborator boundary.
//!
//! Document bytes are persisted through this trait *before* the core
//! command is applied; a failed upload aborts the whole operation, so an
//! aggregate can never be marked responded with a missing or broken
//! attachment.

/// A document handed to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    /// The original file name, kept as the display name.
    pub file_name: String,
    /// The caller-declared content type.
    pub content_type: String,
    /// The document bytes.
    pub bytes: Vec<u8>,
}

/// Errors raised by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The collaborator refused the document.
    Rejected {
        /// Why the document was refused.
        reason: String,
    },
    /// The transfer itself failed.
    TransportFailed {
        /// Why the transfer failed.
        reason: String,
    },
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { reason } => write!(f, "Upload rejected: {reason}"),
            Self::TransportFailed { reason } => write!(f, "Upload transport failed: {reason}"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Blob storage collaborator.
///
/// The implementation generates an upload target, transfers the bytes,
/// and returns an opaque storage reference usable for later retrieval.
/// The reference is the only thing the quotation system keeps.
pub trait BlobStorage {
    /// Stores a document and returns its storage reference.
    ///
    /// # Arguments
    ///
    /// * `upload` - The document to store
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be stored; the caller must
    /// abort its enclosing operation without writing anything.
    fn store_document(&mut self, upload: &DocumentUpload) -> Result<String, UploadError>;
}
