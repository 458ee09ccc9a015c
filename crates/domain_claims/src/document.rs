//! Document attachments and upload screening
//!
//! A document is owned by exactly one claim. Screening applies the original
//! upload rules: an extension allow-list and a 10 MiB size cap, with
//! rejected files skipped per-file rather than failing the batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::DocumentId;

/// Maximum accepted attachment size
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted file extensions (compared case-insensitively)
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["pdf", "docx", "xlsx", "jpg", "jpeg", "png"];

/// A supporting document attached to a claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Opaque token
    pub id: DocumentId,
    /// Original file name
    pub file_name: String,
    /// File extension, without the dot
    pub file_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
}

/// A candidate file as handed over by the file-picker layer
#[derive(Debug, Clone)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub size_bytes: u64,
}

/// Per-file screening failure, surfaced as a warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRejection {
    pub file_name: String,
    pub reason: String,
}

impl Document {
    /// Screens a single upload against the attachment rules
    pub fn screen(upload: &AttachmentUpload) -> Result<Document, DocumentRejection> {
        let extension = upload
            .file_name
            .rsplit_once('.')
            .map(|(stem, ext)| (stem, ext))
            .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .map(|(_, ext)| ext);

        let extension = match extension {
            Some(ext) if ALLOWED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)) => ext,
            Some(ext) => {
                return Err(DocumentRejection {
                    file_name: upload.file_name.clone(),
                    reason: format!("Disallowed file type: .{ext}"),
                })
            }
            None => {
                return Err(DocumentRejection {
                    file_name: upload.file_name.clone(),
                    reason: "Missing file extension".to_string(),
                })
            }
        };

        if upload.size_bytes > MAX_DOCUMENT_BYTES {
            return Err(DocumentRejection {
                file_name: upload.file_name.clone(),
                reason: format!("File too large: {}", upload.file_name),
            });
        }

        Ok(Document {
            id: DocumentId::generate(),
            file_name: upload.file_name.clone(),
            file_type: extension.to_ascii_lowercase(),
            size_bytes: upload.size_bytes,
            uploaded_at: Utc::now(),
        })
    }
}

/// Screens a batch of uploads
///
/// Rejected files become warnings; the accepted remainder proceeds. An
/// all-rejected batch yields an empty accepted list, not an error.
pub fn screen_attachments(
    uploads: &[AttachmentUpload],
) -> (Vec<Document>, Vec<DocumentRejection>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for upload in uploads {
        match Document::screen(upload) {
            Ok(document) => accepted.push(document),
            Err(rejection) => rejected.push(rejection),
        }
    }

    (accepted, rejected)
}
