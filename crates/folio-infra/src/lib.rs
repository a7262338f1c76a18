//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`:
//! SeaORM repositories over Postgres, the JWT session-token service,
//! Argon2 password hashing, and the object-storage client.

pub mod auth;
pub mod database;
pub mod storage;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, connect};
pub use storage::{HttpObjectStore, InMemoryObjectStore, StorageConfig};
