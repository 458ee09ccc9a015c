//! Claims domain errors

use thiserror::Error;

use domain_identity::Role;

use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Role {role} may not {action}")]
    NotPermitted { action: &'static str, role: Role },

    #[error("Unknown claim status: '{0}'")]
    UnknownStatus(String),
}
