//! Test Utilities Crate
//!
//! Shared fixtures and helpers for the claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built users, credentials and amounts
//! - `builders`: Builder patterns for claims and users
//! - `database`: In-memory database helpers

pub mod builders;
pub mod database;
pub mod fixtures;

pub use builders::*;
pub use database::*;
pub use fixtures::*;
