//! Setup command - provisions AWS resources
//!
//! Safe to run repeatedly: existing resources are left untouched.

use tracing::info;

use super::bootstrap;
use crate::config::StorageBackend;

pub async fn run() -> anyhow::Result<()> {
    let config = bootstrap();

    if config.storage.backend != StorageBackend::Dynamodb {
        info!("Storage backend is memory; nothing to provision");
        return Ok(());
    }

    let (repository, storage) = crate::create_aws_adapters(&config.aws).await?;

    if repository.ensure_table().await? {
        info!(table = %repository.table_name(), "Created users table");
    } else {
        info!(table = %repository.table_name(), "Users table already present");
    }

    if storage.ensure_bucket(&config.aws.region).await? {
        info!(bucket = %storage.bucket(), "Created bucket");
    } else {
        info!(bucket = %storage.bucket(), "Bucket already present");
    }

    info!("Setup complete");
    Ok(())
}
