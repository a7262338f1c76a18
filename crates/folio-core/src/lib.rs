//! # Folio Core
//!
//! The domain layer of the Folio publication-management backend.
//! Pure business logic with zero infrastructure dependencies: entities,
//! the publication review workflow, edit-history replay, and the ports
//! infrastructure must implement.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
