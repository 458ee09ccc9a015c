//! Identity Domain
//!
//! This crate implements the authenticated-user side of the claims system:
//! the closed role enumeration, the user entity, the session context a
//! caller threads through every protected operation, and the authorization
//! guard that gates actions on roles.
//!
//! The session is an explicit value owned by the caller rather than a
//! process-wide singleton, so two sessions can coexist in tests.

pub mod error;
pub mod guard;
pub mod password;
pub mod session;
pub mod user;

pub use error::IdentityError;
pub use guard::{authorize, is_authorized};
pub use session::Session;
pub use user::{Role, User};
