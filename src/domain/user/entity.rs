//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::UserValidationError;

/// User identifier - a UUID assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form
    pub fn parse(id: &str) -> Result<Self, UserValidationError> {
        Uuid::parse_str(id.trim())
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId(id.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// Fields are private; state changes go through the mutators, each of which
/// refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with a generated ID
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::builder(email, name).build()
    }

    /// Start building a user with optional identity and timestamps
    pub fn builder(email: impl Into<String>, name: impl Into<String>) -> UserBuilder {
        UserBuilder {
            id: None,
            email: email.into(),
            name: name.into(),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Replace the display name
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Deactivate the user
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    /// Activate the user. Refreshes `updated_at` even when already active.
    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// Builder for [`User`]
#[derive(Debug, Clone)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: String,
    name: String,
    is_active: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl UserBuilder {
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Fill structural defaults. No semantic validation happens here.
    ///
    /// A missing `updated_at` takes the `created_at` value; one that precedes
    /// `created_at` is clamped up to it.
    pub fn build(self) -> User {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let updated_at = self.updated_at.unwrap_or(created_at).max(created_at);

        User {
            id: self.id.unwrap_or_else(UserId::generate),
            email: self.email,
            name: self.name,
            is_active: self.is_active,
            created_at,
            updated_at,
        }
    }
}
