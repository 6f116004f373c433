//! Shared API types

pub mod error;
pub mod json;
pub mod user;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use user::{
    CreateUserRequest, DeleteUserResponse, FileDeletedResponse, FileResponse, ListUsersQuery,
    UpdateUserRequest, UserListResponse, UserResponse,
};
