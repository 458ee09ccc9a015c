//! Claims Domain
//!
//! This crate implements the claim lifecycle from submission through review
//! to a terminal outcome, together with attachment screening and the
//! dashboard aggregation the review views render.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Draft -> Submitted -> UnderReview -> Approved -> Paid
//!                   \________________/        \
//!                           Rejected           (terminal: Paid, Rejected)
//! ```
//!
//! Claims created through the service path start at `Submitted`; `Draft`
//! and `UnderReview` are retained for completeness and future extension.

pub mod claim;
pub mod document;
pub mod error;
pub mod lifecycle;
pub mod stats;

pub use claim::{derive_amount, Claim, ClaimRecord, ClaimStatus, ClaimSubmission};
pub use document::{
    screen_attachments, AttachmentUpload, Document, DocumentRejection, MAX_DOCUMENT_BYTES,
};
pub use error::ClaimError;
pub use stats::DashboardStats;
