//! Application layer - use cases orchestrating domain ports

pub mod user;

pub use user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
    UserChanges, UserUseCases,
};
