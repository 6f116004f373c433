//! Shared AWS SDK configuration

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::config::Credentials;
use tracing::debug;

use crate::config::AwsConfig;

/// Load SDK config for the configured region.
///
/// Explicit keys win over the default provider chain; an endpoint override
/// applies to every client built from the result.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        debug!(endpoint = %endpoint, "Using custom AWS endpoint");
        loader = loader.endpoint_url(endpoint);
    }

    if let Some(credentials) = static_credentials(config) {
        loader = loader.credentials_provider(credentials);
    }

    loader.load().await
}

fn static_credentials(config: &AwsConfig) -> Option<Credentials> {
    match (&config.access_key_id, &config.secret_access_key) {
        (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => Some(
            Credentials::new(key, secret, None, None, "app-config"),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials_need_both_keys() {
        let mut config = AwsConfig::default();
        assert!(static_credentials(&config).is_none());

        config.access_key_id = Some("AKIDEXAMPLE".to_string());
        assert!(static_credentials(&config).is_none());

        config.secret_access_key = Some("secret".to_string());
        let credentials = static_credentials(&config).unwrap();
        assert_eq!(credentials.access_key_id(), "AKIDEXAMPLE");
        assert_eq!(credentials.secret_access_key(), "secret");
    }

    #[tokio::test]
    async fn test_load_uses_configured_region() {
        let config = AwsConfig {
            region: "eu-central-1".to_string(),
            endpoint_url: Some("http://localhost:4566".to_string()),
            access_key_id: Some("test".to_string()),
            secret_access_key: Some("test".to_string()),
            ..AwsConfig::default()
        };

        let sdk_config = load_sdk_config(&config).await;

        assert_eq!(sdk_config.region().map(|r| r.as_ref()), Some("eu-central-1"));
        assert_eq!(sdk_config.endpoint_url(), Some("http://localhost:4566"));
    }
}
