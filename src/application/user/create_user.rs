//! Create user use case

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{DomainError, User, UserFactory, UserRepository};

/// Registers a new user with a unique email
///
/// The uniqueness check is read-then-write: two concurrent calls with the same
/// email can both pass it. Closing that window is up to the repository adapter.
pub struct CreateUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Validate, check for an existing email, then save
    pub async fn execute(&self, email: &str, name: &str) -> Result<User, DomainError> {
        let user = UserFactory::create(email, name, true)?;

        if self.repository.find_by_email(user.email()).await?.is_some() {
            warn!(email = %user.email(), "Rejected duplicate email");
            return Err(DomainError::already_exists(format!(
                "Email '{}' is already registered",
                user.email()
            )));
        }

        let saved = self.repository.save(&user).await?;
        info!(user_id = %saved.id(), "User created");

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use mockall::predicate;

    fn use_case(repo: MockUserRepository) -> CreateUserUseCase {
        CreateUserUseCase::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(predicate::function(|email: &str| email == "a@b.com"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|user| Ok(user.clone()));

        let user = use_case(repo).execute("a@b.com", "Ann").await.unwrap();

        assert_eq!(user.email(), "a@b.com");
        assert_eq!(user.name(), "Ann");
        assert!(user.is_active());
        assert_eq!(user.created_at(), user.updated_at());
        assert!(!user.id().to_string().is_empty());
    }

    #[tokio::test]
    async fn test_create_user_normalizes_email_before_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(predicate::function(|email: &str| email == "ann@example.com"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save().returning(|user| Ok(user.clone()));

        let user = use_case(repo)
            .execute("  Ann@Example.com ", " Ann ")
            .await
            .unwrap();

        assert_eq!(user.email(), "ann@example.com");
        assert_eq!(user.name(), "Ann");
    }

    #[tokio::test]
    async fn test_create_user_existing_email_performs_no_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(User::new(email, "Someone"))));
        repo.expect_save().never();

        let result = use_case(repo).execute("a@b.com", "Ann2").await;

        assert!(matches!(result, Err(DomainError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_create_user_malformed_email() {
        for email in ["ab.com", "a@", "a@b", "a@b.c"] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_email().never();
            repo.expect_save().never();

            let result = use_case(repo).execute(email, "Ann").await;
            assert!(
                matches!(result, Err(DomainError::InvalidInput { .. })),
                "expected '{}' to be rejected",
                email
            );
        }
    }

    #[tokio::test]
    async fn test_create_user_blank_fields() {
        for (email, name) in [("", "Ann"), ("a@b.com", ""), ("a@b.com", "   "), ("  ", "Ann")] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_email().never();
            repo.expect_save().never();

            let result = use_case(repo).execute(email, name).await;
            assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
        }
    }

    #[tokio::test]
    async fn test_create_user_lookup_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(DomainError::storage("throttled")));
        repo.expect_save().never();

        let result = use_case(repo).execute("a@b.com", "Ann").await;

        assert_eq!(result, Err(DomainError::storage("throttled")));
    }

    #[tokio::test]
    async fn test_create_user_save_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(DomainError::storage("connection reset")));

        let result = use_case(repo).execute("a@b.com", "Ann").await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_create_user_long_name() {
        let long_name = "a".repeat(300);
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|user| Ok(user.clone()));

        let user = use_case(repo)
            .execute("long@example.com", &long_name)
            .await
            .unwrap();

        assert_eq!(user.name(), long_name);
    }
}
