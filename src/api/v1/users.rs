//! User endpoint handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateUserRequest, DeleteUserResponse, Json, ListUsersQuery, UpdateUserRequest,
    UserListResponse, UserResponse,
};
use crate::domain::UserId;

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(email = %request.email, "Creating user");

    let user = state
        .users
        .create
        .execute(&request.email, &request.name)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<UserListResponse>, ApiError> {
    let active_only = query.active.unwrap_or(false);
    debug!(active_only, "Listing users");

    let users = if active_only {
        state.users.list.execute_active().await?
    } else {
        state.users.list.execute().await?
    };

    Ok(Json(UserListResponse::new(
        users.iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(user_id = %id, "Getting user");

    let user = state.users.get.execute(&id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(user_id = %id, "Updating user");

    let user = state.users.update.execute(&id, request.into()).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(user_id = %id, "Deleting user");

    state.users.delete.execute(&id).await?;

    Ok(Json(DeleteUserResponse {
        deleted: true,
        id: id.to_string(),
    }))
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::parse(raw).map_err(|e| ApiError::bad_request(e.to_string()).with_param("id"))
}
