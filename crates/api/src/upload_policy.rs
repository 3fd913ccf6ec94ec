// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document upload policy validation.
//!
//! The surrounding UI restricts uploads to a single PDF of at most
//! 10 MB; those constraints are re-validated server-side here rather
//! than trusted from the client.

use thiserror::Error;

use crate::storage::DocumentUpload;

/// Upload policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadPolicyError {
    /// The document format is not accepted.
    #[error("Unsupported document format '{extension}': only {accepted} is accepted")]
    UnsupportedFormat { extension: String, accepted: String },

    /// The document exceeds the size cap.
    #[error("Document is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    /// The document has no content.
    #[error("Document is empty")]
    Empty,
}

/// Upload policy configuration.
pub struct UploadPolicy {
    /// The accepted file extension, lowercase, including the dot.
    pub accepted_extension: String,
    /// Maximum document size in bytes.
    pub max_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accepted_extension: String::from(".pdf"),
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

impl UploadPolicy {
    /// Validates a document upload against the policy.
    ///
    /// # Arguments
    ///
    /// * `upload` - The document to validate
    ///
    /// # Errors
    ///
    /// Returns an `UploadPolicyError` if the document is empty, too
    /// large, or not in the accepted format.
    pub fn validate(&self, upload: &DocumentUpload) -> Result<(), UploadPolicyError> {
        if upload.bytes.is_empty() {
            return Err(UploadPolicyError::Empty);
        }

        if upload.bytes.len() > self.max_bytes {
            return Err(UploadPolicyError::TooLarge {
                size: upload.bytes.len(),
                limit: self.max_bytes,
            });
        }

        let file_name: String = upload.file_name.to_lowercase();
        if !file_name.ends_with(&self.accepted_extension) {
            let extension: String = file_name
                .rfind('.')
                .map_or_else(String::new, |index| file_name[index..].to_string());
            return Err(UploadPolicyError::UnsupportedFormat {
                extension,
                accepted: self.accepted_extension.clone(),
            });
        }

        Ok(())
    }
}
