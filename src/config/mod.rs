//! Layered configuration: `config/default`, `config/local`, then `APP__*` env vars

mod app_config;

pub use app_config::{
    AppConfig, AppInfoConfig, AwsConfig, LogFormat, LoggingConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
