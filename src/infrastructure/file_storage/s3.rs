//! S3 file storage

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::{debug, error, info};

use crate::domain::{validate_file_key, DomainError, FileStorage};

/// Region in which buckets are created without a location constraint
const DEFAULT_REGION: &str = "us-east-1";

/// S3-backed file storage
#[derive(Debug, Clone)]
pub struct S3FileStorage {
    client: Client,
    bucket: String,
    endpoint_url: Option<String>,
}

impl S3FileStorage {
    pub fn new(client: Client, bucket: impl Into<String>, endpoint_url: Option<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            endpoint_url,
        }
    }

    /// Build a client from shared AWS config.
    ///
    /// Custom endpoints (LocalStack, MinIO) get path-style addressing.
    pub fn from_sdk_config(
        config: &SdkConfig,
        bucket: impl Into<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(config)
            .force_path_style(endpoint_url.is_some())
            .build();

        Self::new(Client::from_conf(s3_config), bucket, endpoint_url)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Create the bucket if missing. Returns `true` when created by this call.
    pub async fn ensure_bucket(&self, region: &str) -> Result<bool, DomainError> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => {
                debug!(bucket = %self.bucket, "Bucket already exists");
                return Ok(false);
            }
            Err(err) if err.as_service_error().is_some_and(|e| e.is_not_found()) => {}
            Err(err) => return Err(storage_error("head_bucket", err)),
        }

        let mut request = self.client.create_bucket().bucket(&self.bucket);

        if region != DEFAULT_REGION {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            );
        }

        request
            .send()
            .await
            .map_err(|e| storage_error("create_bucket", e))?;

        info!(bucket = %self.bucket, region = %region, "Bucket created");
        Ok(true)
    }
}

#[async_trait]
impl FileStorage for S3FileStorage {
    async fn upload(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> Result<String, DomainError> {
        validate_file_key(key)?;

        debug!(bucket = %self.bucket, key = %key, size = content.len(), "Uploading object");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(content))
            .set_content_type(content_type.map(str::to_string))
            .send()
            .await
            .map_err(|e| storage_error("put_object", e))?;

        Ok(object_url(&self.bucket, self.endpoint_url.as_deref(), key))
    }

    async fn url(&self, key: &str) -> Result<String, DomainError> {
        validate_file_key(key)?;
        Ok(object_url(&self.bucket, self.endpoint_url.as_deref(), key))
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        validate_file_key(key)?;

        // S3 reports success whether or not the key existed
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| storage_error("delete_object", e))?;

        Ok(true)
    }

    async fn exists(&self, key: &str) -> bool {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => true,
            Err(err) => {
                debug!(
                    bucket = %self.bucket,
                    key = %key,
                    error = %DisplayErrorContext(err),
                    "Object not found or not accessible"
                );
                false
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "s3"
    }
}

/// Public URL of an object.
///
/// With a custom endpoint the URL is path-style: `{endpoint}/{bucket}/{key}`.
pub fn object_url(bucket: &str, endpoint_url: Option<&str>, key: &str) -> String {
    match endpoint_url {
        Some(endpoint) => format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key),
        None => format!("https://{}.s3.amazonaws.com/{}", bucket, key),
    }
}

fn storage_error<E>(operation: &str, err: E) -> DomainError
where
    E: std::error::Error,
{
    let message = DisplayErrorContext(err).to_string();
    error!(operation = operation, error = %message, "S3 request failed");
    DomainError::storage(format!("S3 {} failed: {}", operation, message))
}
