//! Credential store
//!
//! Persists user accounts and verifies login credentials. Passwords are
//! hashed before the INSERT; plaintext never reaches the database. All
//! authentication mismatches (unknown email, wrong password, deactivated
//! account) are indistinguishable to the caller.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::{debug, info};

use core_kernel::UserId;
use domain_identity::password::{hash_password, verify_password};
use domain_identity::{Role, User};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// The four first-run demo accounts, one per role
///
/// Seeded only into an empty store; a deliberate demo convenience, not a
/// production posture.
pub const DEMO_ACCOUNTS: [(&str, &str, &str, Role); 4] = [
    ("admin@university.ac.za", "Admin@123", "System Administrator", Role::Admin),
    ("lecturer@university.ac.za", "Lecturer@123", "Dr. John Lecturer", Role::Lecturer),
    ("coordinator@university.ac.za", "Coordinator@123", "Academic Coordinator", Role::Coordinator),
    ("manager@university.ac.za", "Manager@123", "Programme Manager", Role::Manager),
];

/// Data for creating a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Repository for user accounts and credential checks
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: DatabasePool,
}

impl UserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Creates a user, hashing the password first
    ///
    /// # Errors
    ///
    /// `DuplicateEntry` when the email already exists.
    pub async fn create(&self, new_user: NewUser) -> Result<UserId, DatabaseError> {
        let password_hash = hash_password(&new_user.password)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, full_name, role, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, 1, ?5)
            "#,
        )
        .bind(&new_user.email)
        .bind(&password_hash)
        .bind(&new_user.full_name)
        .bind(new_user.role.as_str())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        let id = UserId::new(result.last_insert_rowid());
        info!(user = %id, email = %new_user.email, role = %new_user.role, "user created");
        Ok(id)
    }

    /// Verifies credentials against an active account
    ///
    /// Returns `Some(user)` only on a full match, updating `last_login` as
    /// a side effect. Any mismatch returns `None` with `last_login`
    /// untouched.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT user_id, email, password_hash, full_name, role, is_active,
                   created_at, last_login
            FROM users
            WHERE email = ?1 AND is_active = 1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        let row = match row {
            Some(row) if verify_password(password, &row.password_hash) => row,
            _ => {
                debug!(email, "authentication failed");
                return Ok(None);
            }
        };

        let now = Utc::now();
        sqlx::query("UPDATE users SET last_login = ?1 WHERE user_id = ?2")
            .bind(now.to_rfc3339())
            .bind(row.user_id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_sqlx)?;

        let mut user = row.into_user()?;
        user.last_login = Some(now);
        Ok(Some(user))
    }

    /// Replaces the stored hash after verifying the old password
    ///
    /// Returns `Ok(false)` when the old password does not verify (or the
    /// user does not exist); the stored hash is untouched in that case.
    pub async fn change_password(
        &self,
        user_id: UserId,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, DatabaseError> {
        let stored: Option<(String,)> =
            sqlx::query_as("SELECT password_hash FROM users WHERE user_id = ?1")
                .bind(user_id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(DatabaseError::from_sqlx)?;

        let verified = matches!(&stored, Some((hash,)) if verify_password(old_password, hash));
        if !verified {
            return Ok(false);
        }

        let new_hash = hash_password(new_password)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        sqlx::query("UPDATE users SET password_hash = ?1 WHERE user_id = ?2")
            .bind(&new_hash)
            .bind(user_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_sqlx)?;

        info!(user = %user_id, "password changed");
        Ok(true)
    }

    /// Looks up a user by email, regardless of active flag
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT user_id, email, password_hash, full_name, role, is_active,
                   created_at, last_login
            FROM users
            WHERE email = ?1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        row.map(UserRow::into_user).transpose()
    }

    /// Number of accounts in the store
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from_sqlx)?;
        Ok(count)
    }

    /// Seeds the four demo accounts into an empty store
    ///
    /// Returns whether seeding ran. A non-empty store is left untouched.
    pub async fn seed_demo_accounts(&self) -> Result<bool, DatabaseError> {
        if self.count().await? > 0 {
            return Ok(false);
        }

        for (email, password, full_name, role) in DEMO_ACCOUNTS {
            self.create(NewUser {
                email: email.to_string(),
                password: password.to_string(),
                full_name: full_name.to_string(),
                role,
            })
            .await?;
        }

        info!("seeded demo accounts into empty user store");
        Ok(true)
    }
}

/// Database row for a user
#[derive(Debug, FromRow)]
struct UserRow {
    user_id: i64,
    email: String,
    password_hash: String,
    full_name: String,
    role: String,
    is_active: i64,
    created_at: String,
    last_login: Option<String>,
}

impl UserRow {
    /// Maps the row into the domain entity, dropping the hash
    fn into_user(self) -> Result<User, DatabaseError> {
        let role: Role = self
            .role
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("unknown role '{}'", self.role)))?;

        Ok(User {
            id: UserId::new(self.user_id),
            email: self.email,
            full_name: self.full_name,
            role,
            active: self.is_active != 0,
            created_at: parse_timestamp(&self.created_at)?,
            last_login: self.last_login.as_deref().map(parse_timestamp).transpose()?,
        })
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::CorruptRow(format!("bad timestamp '{raw}': {e}")))
}
