//! Mentana backend
//!
//! User management service exposing:
//! - User registration, lookup, listing, update and removal
//! - Blob storage for user files
//! - In-memory or DynamoDB + S3 persistence, selected by configuration

pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::api::state::AppState;
use crate::config::{AwsConfig, StorageBackend};
use crate::domain::{FileStorage, UserRepository};
use crate::infrastructure::{
    aws, DynamoDbUserRepository, InMemoryFileStorage, InMemoryUserRepository, S3FileStorage,
};

/// Create the application state with adapters chosen by `storage.backend`
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let (user_repository, file_storage): (Arc<dyn UserRepository>, Arc<dyn FileStorage>) =
        match config.storage.backend {
            StorageBackend::Memory => (
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryFileStorage::new(
                    config.aws.s3_bucket.as_deref().unwrap_or("local"),
                )),
            ),
            StorageBackend::Dynamodb => {
                let (repository, storage) = create_aws_adapters(&config.aws).await?;
                info!(
                    table = %repository.table_name(),
                    bucket = %storage.bucket(),
                    region = %config.aws.region,
                    "Using DynamoDB and S3"
                );
                (Arc::new(repository), Arc::new(storage))
            }
        };

    Ok(AppState::new(
        user_repository,
        file_storage,
        config.app.name.clone(),
        config.app.version.clone(),
    ))
}

/// Build the DynamoDB repository and S3 storage from one shared SDK config
pub async fn create_aws_adapters(
    config: &AwsConfig,
) -> anyhow::Result<(DynamoDbUserRepository, S3FileStorage)> {
    let table = config
        .dynamodb_table
        .clone()
        .filter(|t| !t.is_empty())
        .context("aws.dynamodb_table is required for the dynamodb backend")?;
    let bucket = config
        .s3_bucket
        .clone()
        .filter(|b| !b.is_empty())
        .context("aws.s3_bucket is required for the dynamodb backend")?;

    let sdk_config = aws::load_sdk_config(config).await;

    Ok((
        DynamoDbUserRepository::from_sdk_config(&sdk_config, table),
        S3FileStorage::from_sdk_config(&sdk_config, bucket, config.endpoint_url.clone()),
    ))
}
