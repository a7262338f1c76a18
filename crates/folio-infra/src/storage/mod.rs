//! Object storage implementations.

mod http;
mod memory;

pub use http::{HttpObjectStore, StorageConfig};
pub use memory::InMemoryObjectStore;
