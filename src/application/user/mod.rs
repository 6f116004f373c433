//! User use cases
//!
//! Each use case depends only on the [`UserRepository`] port.

mod create_user;
mod delete_user;
mod get_user;
mod list_users;
mod update_user;

use std::sync::Arc;

use crate::domain::UserRepository;

pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::{UpdateUserUseCase, UserChanges};

/// All user use cases wired to one repository
pub struct UserUseCases {
    pub create: CreateUserUseCase,
    pub get: GetUserUseCase,
    pub list: ListUsersUseCase,
    pub update: UpdateUserUseCase,
    pub delete: DeleteUserUseCase,
}

impl UserUseCases {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            create: CreateUserUseCase::new(repository.clone()),
            get: GetUserUseCase::new(repository.clone()),
            list: ListUsersUseCase::new(repository.clone()),
            update: UpdateUserUseCase::new(repository.clone()),
            delete: DeleteUserUseCase::new(repository),
        }
    }
}
