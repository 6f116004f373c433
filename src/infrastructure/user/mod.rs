//! User repository adapters
//!
//! An in-memory store for local runs and tests, and a DynamoDB store for
//! deployed environments.

mod dynamodb_item;
mod dynamodb_repository;
mod in_memory_repository;

pub use dynamodb_item::{item_to_user, user_to_item};
pub use dynamodb_repository::{DynamoDbUserRepository, EMAIL_INDEX};
pub use in_memory_repository::InMemoryUserRepository;
