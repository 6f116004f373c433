//! User domain
//!
//! This module provides the user entity, its validation rules, a factory for
//! validated construction and the repository port adapters implement.

mod entity;
mod factory;
mod repository;
mod validation;

pub use entity::{User, UserBuilder, UserId};
pub use factory::UserFactory;
pub use repository::UserRepository;
pub use validation::{normalize_email, validate_email, validate_name, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
