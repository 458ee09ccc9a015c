//! Administration service

use tracing::info;

use core_kernel::UserId;
use domain_identity::password::validate_password;
use domain_identity::{authorize, Role, Session};
use infra_audit::AuditLog;
use infra_db::{NewUser, UserRepository};

use crate::error::AppError;

/// Account creation and self-registration
#[derive(Debug, Clone)]
pub struct AdminService {
    users: UserRepository,
    audit: AuditLog,
}

impl AdminService {
    pub fn new(users: UserRepository, audit: AuditLog) -> Self {
        Self { users, audit }
    }

    /// Creates an account with any role; requires an Admin session
    pub async fn create_user(
        &self,
        session: &Session,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
    ) -> Result<UserId, AppError> {
        authorize(session, &[Role::Admin])?;
        let id = self.insert(email, password, full_name, role).await?;

        self.audit.record_action(
            session,
            "CreateUser",
            &format!("Created {} account for {}", role, email),
        );
        Ok(id)
    }

    /// Self-registration of a new account, no session required
    ///
    /// The account is created with the requested role; no approval step
    /// exists between registration and first login.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
    ) -> Result<UserId, AppError> {
        let id = self.insert(email, password, full_name, role).await?;
        info!(email, %role, "account registered");
        Ok(id)
    }

    async fn insert(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
    ) -> Result<UserId, AppError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation(
                "A valid email address is required".to_string(),
            ));
        }
        if full_name.trim().is_empty() {
            return Err(AppError::Validation("Full name is required".to_string()));
        }
        validate_password(password)?;

        let id = self
            .users
            .create(NewUser {
                email: email.to_string(),
                password: password.to_string(),
                full_name: full_name.trim().to_string(),
                role,
            })
            .await?;
        Ok(id)
    }
}
