//! Versioned REST endpoints

pub mod files;
pub mod users;

use axum::{
    routing::{get, put},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/files/{*key}",
            put(files::upload_file)
                .get(files::get_file)
                .delete(files::delete_file),
        )
}
