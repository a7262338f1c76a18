//! In-memory object store - used as fallback when no bucket is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::ports::{ObjectStore, StorageError};

struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

/// In-memory object store. Objects are lost on process restart; URLs are
/// not actually servable.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let mut objects = self.objects.write().await;
        objects.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );

        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("memory://{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_overwrites_and_returns_url() {
        let store = InMemoryObjectStore::new();

        let url = store
            .put("avatars/1.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();
        assert_eq!(url, "memory://avatars/1.png");

        store
            .put("avatars/1.png", vec![4, 5], "image/png")
            .await
            .unwrap();
        assert_eq!(store.len().await, 1);

        let objects = store.objects.read().await;
        let stored = objects.get("avatars/1.png").unwrap();
        assert_eq!(stored.bytes, vec![4, 5]);
        assert_eq!(stored.content_type, "image/png");
    }
}
