//! User repository trait

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Port for user persistence
///
/// Absence is reported as `Ok(None)` / `Ok(false)`, never as an error.
/// Adapter failures come back as [`DomainError::Storage`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace a user by ID
    async fn save(&self, user: &User) -> Result<User, DomainError>;

    /// Point lookup by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Secondary lookup by (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Every stored user, in no particular order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Users with `is_active = true`
    async fn find_active_users(&self) -> Result<Vec<User>, DomainError>;

    /// Remove a user, returning whether a record existed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Write `name`, `is_active` and `updated_at` of an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;
}
