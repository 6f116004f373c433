//! Update user use case

use std::sync::Arc;

use tracing::info;

use crate::domain::user::validate_name;
use crate::domain::{DomainError, User, UserId, UserRepository};

/// Fields a caller may change on an existing user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_active.is_none()
    }
}

/// Renames and/or toggles the active flag of a user
pub struct UpdateUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &UserId, changes: UserChanges) -> Result<User, DomainError> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User with ID {} not found", id)))?;

        if changes.is_empty() {
            return Ok(user);
        }

        if let Some(name) = changes.name {
            user.update_name(name.trim());
        }

        match changes.is_active {
            Some(true) => user.activate(),
            Some(false) => user.deactivate(),
            None => {}
        }

        let updated = self.repository.update(&user).await?;
        info!(user_id = %updated.id(), "User updated");

        Ok(updated)
    }
}
