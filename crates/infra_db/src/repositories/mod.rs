//! Repository implementations

pub mod claims;
pub mod users;
