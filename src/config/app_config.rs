use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppInfoConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub aws: AwsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppInfoConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated origins, or `*` for any
    pub cors_allowed_origins: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

/// Which adapters back the repository and file storage ports
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Dynamodb,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub region: String,
    /// Custom endpoint for LocalStack or other S3/DynamoDB compatible services
    pub endpoint_url: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub dynamodb_table: Option<String>,
    pub s3_bucket: Option<String>,
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_allowed_origins: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parsed allow-list; `None` means any origin
    pub fn cors_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint_url: None,
            access_key_id: None,
            secret_access_key: None,
            dynamodb_table: None,
            s3_bucket: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.aws.region, "us-east-1");
        assert!(config.aws.dynamodb_table.is_none());
        assert_eq!(config.app.name, env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [storage]
            backend = "dynamodb"

            [aws]
            region = "eu-west-1"
            dynamodb_table = "users"
            s3_bucket = "media"
            "#,
        );

        assert_eq!(config.storage.backend, StorageBackend::Dynamodb);
        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(config.aws.dynamodb_table.as_deref(), Some("users"));
        assert_eq!(config.aws.s3_bucket.as_deref(), Some("media"));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_json_log_format() {
        let config = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_cors_origins() {
        let mut server = ServerConfig::default();
        assert!(server.cors_origins().is_none());

        server.cors_allowed_origins = "http://a.test, http://b.test".to_string();
        assert_eq!(
            server.cors_origins(),
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );

        server.cors_allowed_origins = " ".to_string();
        assert!(server.cors_origins().is_none());
    }
}
