//! Infrastructure Database Layer
//!
//! SQLite persistence for the contract claims system, using SQLx with the
//! repository pattern: domain code never sees a connection or a row.
//!
//! The store is an embedded single-file database with a single local
//! writer; the pool exists for connection reuse, not concurrency. Schema
//! bootstrap is idempotent DDL run at startup.

pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_in_memory, DatabaseConfig, DatabasePool};
pub use repositories::claims::ClaimRepository;
pub use repositories::users::{NewUser, UserRepository, DEMO_ACCOUNTS};
pub use schema::ensure_schema;
