//! Authorization guard
//!
//! Every protected operation calls the guard before touching any state.
//! On failure the caller is expected to surface the error and return the
//! user to a safe view; the guard itself performs no navigation.

use crate::error::IdentityError;
use crate::session::Session;
use crate::user::{Role, User};

/// Checks whether the session may perform an action gated on `required`
///
/// A session with no authenticated user is never authorized. An empty role
/// set admits any authenticated user.
pub fn is_authorized(session: &Session, required: &[Role]) -> bool {
    match session.current_user() {
        None => false,
        Some(user) => required.is_empty() || required.contains(&user.role),
    }
}

/// Guard form returning the acting user
///
/// # Errors
///
/// `NotAuthenticated` with no logged-in user, `AuthorizationDenied` when the
/// user's role is outside `required`.
pub fn authorize<'a>(session: &'a Session, required: &[Role]) -> Result<&'a User, IdentityError> {
    let user = session
        .current_user()
        .ok_or(IdentityError::NotAuthenticated)?;

    if required.is_empty() || required.contains(&user.role) {
        Ok(user)
    } else {
        Err(IdentityError::AuthorizationDenied {
            role: user.role,
            required: required.iter().map(Role::as_str).collect::<Vec<_>>().join(", "),
        })
    }
}
