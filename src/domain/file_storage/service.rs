//! File storage port

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::DomainError;

/// Port for opaque blob storage keyed by string
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store `content` under `key` and return a dereferenceable URL
    async fn upload(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> Result<String, DomainError>;

    /// URL for `key`, whether or not the object exists
    async fn url(&self, key: &str) -> Result<String, DomainError>;

    /// Remove the object under `key`
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Existence probe. Implementations report `false` on any storage error.
    async fn exists(&self, key: &str) -> bool;

    /// Short name used in logs and health checks
    fn provider_name(&self) -> &'static str;
}
