//! Application-level errors
//!
//! Domain and infrastructure errors converge here into the taxonomy the
//! presentation layer renders. Authentication failures are deliberately
//! uniform: the caller learns nothing beyond "invalid credentials".

use thiserror::Error;

use domain_claims::{ClaimError, ClaimStatus};
use domain_identity::IdentityError;
use infra_db::DatabaseError;

/// Errors surfaced to the presentation layer
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid email or password")]
    AuthenticationFailed,

    #[error("Access denied: {0}")]
    AuthorizationDenied(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Current password is incorrect")]
    InvalidOldPassword,

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Persistence(String),
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotAuthenticated | IdentityError::AuthorizationDenied { .. } => {
                AppError::AuthorizationDenied(err.to_string())
            }
            IdentityError::HashingFailed => AppError::Persistence(err.to_string()),
            IdentityError::InvalidRole(_) | IdentityError::Validation(_) => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

impl From<ClaimError> for AppError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::Validation(message) => AppError::Validation(message),
            ClaimError::InvalidTransition { from, to } => AppError::InvalidTransition { from, to },
            ClaimError::NotPermitted { .. } => AppError::AuthorizationDenied(err.to_string()),
            ClaimError::UnknownStatus(_) => AppError::Persistence(err.to_string()),
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(message) => AppError::NotFound(message),
            DatabaseError::DuplicateEntry(message) => AppError::DuplicateEmail(message),
            other => AppError::Persistence(other.to_string()),
        }
    }
}
