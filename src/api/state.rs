//! Application state for shared services

use std::sync::Arc;

use crate::application::UserUseCases;
use crate::domain::{FileStorage, UserRepository};

/// Adapters and use cases built once at startup and shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserUseCases>,
    /// Held directly for readiness probes
    pub user_repository: Arc<dyn UserRepository>,
    pub file_storage: Arc<dyn FileStorage>,
    pub app_name: String,
    pub version: String,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        file_storage: Arc<dyn FileStorage>,
        app_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            users: Arc::new(UserUseCases::new(user_repository.clone())),
            user_repository,
            file_storage,
            app_name: app_name.into(),
            version: version.into(),
        }
    }
}
