//! User entity and role enumeration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::UserId;
use crate::error::IdentityError;

/// User role
///
/// A closed enumeration: anything outside these four values is rejected at
/// the boundary. There is no fallback role for blank or unknown input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Submits hourly-pay claims
    Lecturer,
    /// Reviews and approves/rejects claims
    Coordinator,
    /// Reviews claims and marks approved claims paid
    Manager,
    /// Manages user accounts
    Admin,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 4] = [Role::Lecturer, Role::Coordinator, Role::Manager, Role::Admin];

    /// Roles permitted to review claims
    pub const REVIEWERS: [Role; 2] = [Role::Coordinator, Role::Manager];

    /// Returns the stored textual name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Lecturer => "Lecturer",
            Role::Coordinator => "Coordinator",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }

    /// True for roles allowed to act on submitted claims
    pub fn can_review(&self) -> bool {
        matches!(self, Role::Coordinator | Role::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Lecturer" => Ok(Role::Lecturer),
            "Coordinator" => Ok(Role::Coordinator),
            "Manager" => Ok(Role::Manager),
            "Admin" => Ok(Role::Admin),
            other => Err(IdentityError::InvalidRole(other.to_string())),
        }
    }
}

/// An account in the credential store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login email, unique across the store
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Role
    pub role: Role,
    /// Deactivated accounts cannot authenticate
    pub active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last successful login, if any
    pub last_login: Option<DateTime<Utc>>,
}
