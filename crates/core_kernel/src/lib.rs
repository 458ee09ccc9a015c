//! Core Kernel - Foundational types for the contract claims system
//!
//! This crate provides the strongly-typed identifiers shared by all
//! domain modules. Error types live with the domains that raise them.

pub mod identifiers;

pub use identifiers::{ClaimId, DocumentId, UserId};
