//! Authentication service

use tracing::info;

use domain_identity::password::validate_password;
use domain_identity::{authorize, Session};
use infra_audit::AuditLog;
use infra_db::UserRepository;

use crate::error::AppError;

/// Login, logout and password changes
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserRepository,
    audit: AuditLog,
}

impl AuthService {
    pub fn new(users: UserRepository, audit: AuditLog) -> Self {
        Self { users, audit }
    }

    /// Attempts a login, attaching the user to the session on success
    ///
    /// Every attempt with non-blank credentials lands in the audit trail.
    /// All failure modes after that point collapse into
    /// `AuthenticationFailed`.
    pub async fn login(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> Result<(), AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        match self.users.authenticate(email, password).await? {
            Some(user) => {
                self.audit.record_login(email, true);
                info!(email, role = %user.role, "login succeeded");
                session.set(user);
                Ok(())
            }
            None => {
                self.audit.record_login(email, false);
                Err(AppError::AuthenticationFailed)
            }
        }
    }

    /// Logs the session out
    ///
    /// A no-op for anonymous sessions.
    pub fn logout(&self, session: &mut Session) {
        if let Some(user) = session.current_user() {
            self.audit.record_user_action(user, "Logout", "User logged out");
        }
        session.clear();
    }

    /// Changes the authenticated user's password
    ///
    /// The new password must meet the minimum-length rule; the old password
    /// must verify against the stored hash.
    pub async fn change_password(
        &self,
        session: &Session,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = authorize(session, &[])?;
        validate_password(new_password)?;

        let changed = self
            .users
            .change_password(user.id, old_password, new_password)
            .await?;
        if !changed {
            return Err(AppError::InvalidOldPassword);
        }

        self.audit
            .record_action(session, "ChangePassword", "Password changed");
        Ok(())
    }
}
