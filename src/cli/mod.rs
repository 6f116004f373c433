//! CLI module for the Mentana backend
//!
//! - `serve`: HTTP API server (default)
//! - `setup`: provision the DynamoDB table and S3 bucket

pub mod serve;
pub mod setup;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Mentana backend - user management service
#[derive(Parser)]
#[command(name = "mentana-backend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Create the DynamoDB table and S3 bucket if missing
    Setup,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

/// Load `.env`, layered config and install logging
pub(crate) fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    });
    logging::init_logging(&config.logging);

    config
}

pub(crate) fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::parse_from(["mentana-backend"]);
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_setup_command() {
        let cli = Cli::parse_from(["mentana-backend", "setup"]);
        assert_eq!(cli.command(), Command::Setup);
    }

    #[test]
    fn test_build_socket_addr() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9000;

        assert_eq!(
            build_socket_addr(&config).unwrap(),
            "127.0.0.1:9000".parse().unwrap()
        );

        config.server.host = "localhost".to_string();
        assert!(build_socket_addr(&config).is_err());
    }
}
