//! Audit trail
//!
//! Appends one line per recorded event to a plain-text file. The trail is
//! best-effort: a failed append must never fail the action it describes,
//! so write errors are logged and swallowed.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::warn;

use domain_identity::{Session, User};

/// Append-only audit log backed by a text file
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records an action performed by the session's user
    ///
    /// A no-op for anonymous sessions; actions are only auditable once a
    /// user is attached to them.
    pub fn record_action(&self, session: &Session, action: &str, details: &str) {
        let Some(user) = session.current_user() else {
            return;
        };
        self.record_user_action(user, action, details);
    }

    /// Records an action attributed to a specific user
    pub fn record_user_action(&self, user: &User, action: &str, details: &str) {
        let line = format!(
            "{} | User: {} | Role: {} | Action: {} | Details: {}",
            timestamp(Utc::now()),
            user.email,
            user.role,
            action,
            details,
        );
        self.append(&line);
    }

    /// Records a login attempt, successful or not
    pub fn record_login(&self, email: &str, success: bool) {
        let line = format!(
            "{} | LOGIN | Email: {} | Success: {}",
            timestamp(Utc::now()),
            email,
            success,
        );
        self.append(&line);
    }

    fn append(&self, line: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));

        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "audit append failed");
        }
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
