//! Schema bootstrap
//!
//! Idempotent DDL run once at startup; the embedded store has no separate
//! migration pipeline.

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    full_name     TEXT NOT NULL,
    role          TEXT NOT NULL,
    is_active     INTEGER NOT NULL DEFAULT 1,
    created_at    TEXT NOT NULL,
    last_login    TEXT
)
"#;

const CREATE_CLAIMS: &str = r#"
CREATE TABLE IF NOT EXISTS claims (
    claim_id         INTEGER PRIMARY KEY AUTOINCREMENT,
    lecturer_email   TEXT NOT NULL,
    lecturer_name    TEXT NOT NULL,
    amount           TEXT NOT NULL,
    status           TEXT NOT NULL,
    submitted_at     TEXT NOT NULL,
    description      TEXT NOT NULL,
    hours_worked     TEXT NOT NULL,
    hourly_rate      TEXT NOT NULL,
    document_count   INTEGER NOT NULL DEFAULT 0,
    reviewed_by      TEXT,
    reviewed_at      TEXT,
    rejection_reason TEXT
)
"#;

/// Creates both tables if they do not exist
pub async fn ensure_schema(pool: &DatabasePool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_USERS)
        .execute(pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;
    sqlx::query(CREATE_CLAIMS)
        .execute(pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;
    Ok(())
}
