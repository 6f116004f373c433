//! File storage adapters

mod in_memory;
mod s3;

pub use in_memory::{InMemoryFileStorage, StoredObject};
pub use s3::{object_url, S3FileStorage};
