//! File storage domain - blob port and key rules

mod key;
mod service;

pub use key::{validate_file_key, FileKeyError, MAX_FILE_KEY_LENGTH};
pub use service::FileStorage;
