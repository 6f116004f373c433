//! List users use case

use std::sync::Arc;

use crate::domain::{DomainError, User, UserRepository};

/// Lists users exactly as the repository returns them
pub struct ListUsersUseCase {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// All users, no filtering or ordering
    pub async fn execute(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Active users only
    pub async fn execute_active(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_active_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;

    #[tokio::test]
    async fn test_list_returns_everything() {
        let users = vec![
            User::new("a@example.com", "A"),
            User::new("b@example.com", "B"),
            User::new("c@example.com", "C"),
        ];
        let returned = users.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(move || Ok(returned.clone()));
        repo.expect_find_active_users().never();

        let listed = ListUsersUseCase::new(Arc::new(repo)).execute().await.unwrap();

        assert_eq!(listed, users);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().returning(|| Ok(Vec::new()));

        let listed = ListUsersUseCase::new(Arc::new(repo)).execute().await.unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_list_active() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().never();
        repo.expect_find_active_users()
            .times(1)
            .returning(|| Ok(vec![User::new("a@example.com", "A")]));

        let listed = ListUsersUseCase::new(Arc::new(repo))
            .execute_active()
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
    }
}
