//! Application Layer
//!
//! Wires the domain crates to SQLite persistence and the audit trail, and
//! exposes the session-driven services a desktop or CLI front end calls:
//!
//! - [`AuthService`]: login, logout, password changes
//! - [`ClaimService`]: submission, review decisions, payment, dashboards
//! - [`AdminService`]: account creation and self-registration
//!
//! Services never navigate or render; they return domain values and
//! [`AppError`] and leave presentation to the caller.

pub mod config;
pub mod error;
pub mod services;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
pub use services::{AdminService, AuthService, ClaimService, SubmissionOutcome};
