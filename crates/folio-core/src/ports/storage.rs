//! Object storage port - binary upload with public-URL issuance.

use async_trait::async_trait;

/// Abstraction over the hosted object-storage bucket.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload an object under `key` and return its public URL.
    /// Uploading to an existing key replaces the object.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Public URL for an object key.
    fn public_url(&self, key: &str) -> String;
}

/// Object storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
