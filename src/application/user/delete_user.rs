//! Delete user use case

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, UserId, UserRepository};

/// Removes a user by ID
pub struct DeleteUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &UserId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!(
                "User with ID {} not found",
                id
            )));
        }

        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
