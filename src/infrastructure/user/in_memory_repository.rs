//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// Index for email -> user ID lookup
    email_index: HashMap<String, Uuid>,
}

/// In-memory implementation of UserRepository
///
/// Both maps live behind one lock, so `save` rejects an email held by another
/// ID atomically with the insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut tables = Tables::default();

        for user in users {
            let id = *user.id().as_uuid();
            tables.email_index.insert(user.email().to_string(), id);
            tables.users.insert(id, user);
        }

        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        let id = *user.id().as_uuid();

        if let Some(owner) = tables.email_index.get(user.email()) {
            if *owner != id {
                return Err(DomainError::already_exists(format!(
                    "Email '{}' is already registered",
                    user.email()
                )));
            }
        }

        if let Some(previous) = tables.users.insert(id, user.clone()) {
            if previous.email() != user.email() {
                tables.email_index.remove(previous.email());
            }
        }
        tables.email_index.insert(user.email().to_string(), id);

        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .email_index
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().cloned().collect())
    }

    async fn find_active_users(&self) -> Result<Vec<User>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .users
            .values()
            .filter(|u| u.is_active())
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;

        if let Some(user) = tables.users.remove(id.as_uuid()) {
            tables.email_index.remove(user.email());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        let stored = tables
            .users
            .get(user.id().as_uuid())
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user.id())))?;

        // Only the mutable fields are written; id, email and created_at stay as stored
        let merged = User::builder(stored.email(), user.name())
            .id(*stored.id())
            .active(user.is_active())
            .created_at(stored.created_at())
            .updated_at(user.updated_at())
            .build();

        tables.users.insert(*merged.id().as_uuid(), merged.clone());

        Ok(merged)
    }
}
