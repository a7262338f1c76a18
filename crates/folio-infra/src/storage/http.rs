//! Hosted-bucket object store over HTTP.
//!
//! Objects are uploaded with a PUT to `{endpoint}/{bucket}/{key}` and
//! served from `{public_base}/{bucket}/{key}`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use folio_core::ports::{ObjectStore, StorageError};

/// Configuration for the hosted bucket.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub token: Option<String>,
    pub public_base: String,
}

impl StorageConfig {
    /// Read the bucket configuration from the environment. Returns None
    /// when STORAGE_URL is unset.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("STORAGE_URL").ok()?;
        Some(Self {
            public_base: std::env::var("STORAGE_PUBLIC_URL").unwrap_or_else(|_| endpoint.clone()),
            bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "folio".to_string()),
            token: std::env::var("STORAGE_TOKEN").ok(),
            endpoint,
        })
    }
}

/// Object store backed by a hosted HTTP bucket API.
pub struct HttpObjectStore {
    client: reqwest::Client,
    config: StorageConfig,
}

impl HttpObjectStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn object_url(&self, base: &str, key: &str) -> String {
        format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.config.bucket,
            key
        )
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = self.object_url(&self.config.endpoint, key);

        let mut request = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Upload(format!(
                "bucket returned {}",
                response.status()
            )));
        }

        tracing::debug!(key, "Object uploaded");
        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        self.object_url(&self.config.public_base, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_joins_without_double_slash() {
        let store = HttpObjectStore::new(StorageConfig {
            endpoint: "https://storage.example.com/".to_string(),
            bucket: "folio".to_string(),
            token: None,
            public_base: "https://cdn.example.com/".to_string(),
        });

        assert_eq!(
            store.public_url("avatars/7.png"),
            "https://cdn.example.com/folio/avatars/7.png"
        );
    }
}
