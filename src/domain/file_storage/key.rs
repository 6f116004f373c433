//! Object key validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors for malformed object keys
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FileKeyError {
    #[error("File key cannot be empty")]
    Empty,

    #[error("File key exceeds maximum length of {0} bytes")]
    TooLong(usize),

    #[error("File key cannot start with '/'")]
    LeadingSlash,

    #[error("File key cannot contain '..' segments")]
    ParentSegment,
}

impl From<FileKeyError> for DomainError {
    fn from(err: FileKeyError) -> Self {
        DomainError::invalid_input(err.to_string())
    }
}

/// S3 limit on key size
pub const MAX_FILE_KEY_LENGTH: usize = 1024;

/// Validate an object key before it reaches a storage adapter
pub fn validate_file_key(key: &str) -> Result<(), FileKeyError> {
    if key.is_empty() {
        return Err(FileKeyError::Empty);
    }

    if key.len() > MAX_FILE_KEY_LENGTH {
        return Err(FileKeyError::TooLong(MAX_FILE_KEY_LENGTH));
    }

    if key.starts_with('/') {
        return Err(FileKeyError::LeadingSlash);
    }

    if key.split('/').any(|segment| segment == "..") {
        return Err(FileKeyError::ParentSegment);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(validate_file_key("avatar.png").is_ok());
        assert!(validate_file_key("users/123/avatar.png").is_ok());
        assert!(validate_file_key("a..b/c").is_ok());
    }

    #[test]
    fn test_invalid_keys() {
        assert_eq!(validate_file_key(""), Err(FileKeyError::Empty));
        assert_eq!(validate_file_key("/abs"), Err(FileKeyError::LeadingSlash));
        assert_eq!(validate_file_key("a/../b"), Err(FileKeyError::ParentSegment));
        assert_eq!(
            validate_file_key(&"k".repeat(1025)),
            Err(FileKeyError::TooLong(1024))
        );
    }
}
