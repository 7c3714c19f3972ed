//! Configuration management.
//!
//! Settings load from environment variables with sensible defaults; CLI
//! flags override them afterwards.
//!
//! # Environment Variables
//!
//! - `DOCS_MCP_PARTITION`: Documentation partition (aws|aws-cn) - default: "aws"
//! - `DOCS_MCP_REQUEST_TIMEOUT`: Request timeout in seconds - default: "30"
//! - `DOCS_MCP_LOG_LEVEL`: Logging level - default: "info"
//! - `DOCS_MCP_LOG_JSON`: Emit JSON logs (true|false) - default: "false"

use std::env;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::docs::{DocsClient, DocsError, Partition};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid partition name
    #[error("Invalid partition: {0}. Valid options: aws, aws-cn")]
    InvalidPartition(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// HTTP client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInitError(#[from] DocsError),
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct DocsMcpConfig {
    /// Documentation partition to serve
    pub partition: Partition,

    /// Request timeout in seconds for outbound documentation requests
    pub request_timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON
    pub log_json: bool,
}

impl Default for DocsMcpConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    fn default() -> Self {
        let partition = env::var("DOCS_MCP_PARTITION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Partition::Aws);

        let request_timeout_secs = env::var("DOCS_MCP_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let log_level =
            env::var("DOCS_MCP_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let log_json = env::var("DOCS_MCP_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self {
            partition,
            request_timeout_secs,
            log_level,
            log_json,
        }
    }
}

impl DocsMcpConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Builds the shared documentation client from this configuration.
    pub fn create_client(&self) -> Result<Arc<DocsClient>, ConfigError> {
        let client = DocsClient::new(self.request_timeout())?;
        Ok(Arc::new(client))
    }
}
