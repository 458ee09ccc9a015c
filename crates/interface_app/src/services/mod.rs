//! Application services
//!
//! Each service owns its repositories plus a handle to the audit trail,
//! takes the caller's session explicitly, and is the only place where
//! guard checks, domain transitions and persistence are stitched together.

pub mod admin;
pub mod auth;
pub mod claims;

pub use admin::AdminService;
pub use auth::AuthService;
pub use claims::{ClaimService, SubmissionOutcome};
