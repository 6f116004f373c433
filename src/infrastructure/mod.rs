//! Infrastructure layer - adapters for the domain ports

pub mod aws;
pub mod file_storage;
pub mod logging;
pub mod user;

pub use file_storage::{InMemoryFileStorage, S3FileStorage};
pub use user::{DynamoDbUserRepository, InMemoryUserRepository};
