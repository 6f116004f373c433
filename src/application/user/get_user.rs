//! Get user use case

use std::sync::Arc;

use crate::domain::{DomainError, User, UserId, UserRepository};

/// Looks a user up by ID
pub struct GetUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &UserId) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User with ID {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use mockall::predicate;

    #[tokio::test]
    async fn test_get_existing_user() {
        let stored = User::new("a@b.com", "Ann");
        let id = *stored.id();
        let returned = stored.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(predicate::eq(id))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let user = GetUserUseCase::new(Arc::new(repo)).execute(&id).await.unwrap();

        assert_eq!(user, stored);
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = GetUserUseCase::new(Arc::new(repo))
            .execute(&UserId::generate())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_user_storage_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(DomainError::storage("timeout")));

        let result = GetUserUseCase::new(Arc::new(repo))
            .execute(&UserId::generate())
            .await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
