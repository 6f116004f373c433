//! Validated construction of user entities

use chrono::{DateTime, Utc};
use tracing::debug;

use super::entity::{User, UserId};
use super::validation::{normalize_email, validate_email, validate_name, UserValidationError};

/// Builds users from raw caller input
///
/// Unlike [`User::builder`], everything produced here has a well-formed email
/// (trimmed, lower-cased) and a trimmed, non-empty name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFactory;

impl UserFactory {
    /// Create a brand new user with a generated ID
    pub fn create(
        email: &str,
        name: &str,
        is_active: bool,
    ) -> Result<User, UserValidationError> {
        validate_email(email)?;
        validate_name(name)?;

        let user = User::builder(normalize_email(email), name.trim())
            .active(is_active)
            .build();

        debug!(user_id = %user.id(), "User entity created");
        Ok(user)
    }

    /// Rebuild a user with a known ID, e.g. when decoding stored records
    pub fn with_id(
        id: &str,
        email: &str,
        name: &str,
        is_active: bool,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<User, UserValidationError> {
        let id = UserId::parse(id)?;
        validate_email(email)?;
        validate_name(name)?;

        let mut builder = User::builder(normalize_email(email), name.trim())
            .id(id)
            .active(is_active);

        if let Some(created_at) = created_at {
            builder = builder.created_at(created_at);
        }
        if let Some(updated_at) = updated_at {
            builder = builder.updated_at(updated_at);
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_normalizes_input() {
        let user = UserFactory::create("  Ann@Example.COM ", "  Ann  ", true).unwrap();

        assert_eq!(user.email(), "ann@example.com");
        assert_eq!(user.name(), "Ann");
        assert!(user.is_active());
    }

    #[test]
    fn test_create_inactive() {
        let user = UserFactory::create("x@example.com", "X", false).unwrap();
        assert!(!user.is_active());
    }

    #[test]
    fn test_create_rejects_bad_input() {
        assert_eq!(
            UserFactory::create("", "Ann", true),
            Err(UserValidationError::EmptyEmail)
        );
        assert_eq!(
            UserFactory::create("ann@example.com", " ", true),
            Err(UserValidationError::EmptyName)
        );
        assert!(UserFactory::create("ann@", "Ann", true).is_err());
    }

    #[test]
    fn test_with_id() {
        let raw = "0b6f1f5e-7a0d-4c57-a7a5-3c6a7e4f2d11";
        let user = UserFactory::with_id(raw, "b@example.com", "B", true, None, None).unwrap();
        assert_eq!(user.id().to_string(), raw);
    }

    #[test]
    fn test_with_id_invalid_id() {
        let result = UserFactory::with_id("user-1", "b@example.com", "B", true, None, None);
        assert_eq!(
            result,
            Err(UserValidationError::InvalidId("user-1".to_string()))
        );
    }
}
