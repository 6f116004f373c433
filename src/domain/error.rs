use thiserror::Error;

/// Core domain errors
///
/// The first three variants are deliberate domain failures. `Storage` wraps
/// anything an adapter could not do and is propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// The bare message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message }
            | Self::AlreadyExists { message }
            | Self::NotFound { message }
            | Self::Storage { message } => message,
        }
    }
}
