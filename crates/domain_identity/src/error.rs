//! Identity domain errors

use thiserror::Error;

use crate::user::Role;

/// Errors that can occur in the identity domain
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("No authenticated user")]
    NotAuthenticated,

    #[error("Access denied for role {role}; requires one of: {required}")]
    AuthorizationDenied { role: Role, required: String },

    #[error("Unknown role: '{0}'")]
    InvalidRole(String),

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Validation error: {0}")]
    Validation(String),
}
