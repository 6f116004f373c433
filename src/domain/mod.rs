//! Domain layer - Core business logic and entities

pub mod error;
pub mod file_storage;
pub mod user;

pub use error::DomainError;
pub use file_storage::{validate_file_key, FileKeyError, FileStorage};
pub use user::{User, UserFactory, UserId, UserRepository, UserValidationError};
