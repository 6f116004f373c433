//! In-memory file storage

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{validate_file_key, DomainError, FileStorage};

/// A stored object
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub content: Bytes,
    pub content_type: Option<String>,
}

/// Process-local blob store. URLs use the `memory://<bucket>/<key>` form.
#[derive(Debug, Clone)]
pub struct InMemoryFileStorage {
    bucket: String,
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
}

impl InMemoryFileStorage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Read back a stored object
    pub async fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().await.get(key).cloned()
    }

    fn object_url(&self, key: &str) -> String {
        format!("memory://{}/{}", self.bucket, key)
    }
}

impl Default for InMemoryFileStorage {
    fn default() -> Self {
        Self::new("local")
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn upload(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> Result<String, DomainError> {
        validate_file_key(key)?;

        debug!(key = %key, size = content.len(), "Storing object in memory");

        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                content,
                content_type: content_type.map(str::to_string),
            },
        );

        Ok(self.object_url(key))
    }

    async fn url(&self, key: &str) -> Result<String, DomainError> {
        validate_file_key(key)?;
        Ok(self.object_url(key))
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        validate_file_key(key)?;
        Ok(self.objects.write().await.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> bool {
        self.objects.read().await.contains_key(key)
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
