//! Configuration management

use crate::error::{BackofficeError, BackofficeResult, ErrorContext};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level Backoffice configuration, loaded from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackofficeConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Access control settings
    #[serde(default)]
    pub access: AccessConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to listen on
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
}

/// Access control settings
///
/// Values are plain strings here; the access crate parses them into its own
/// types so that core stays free of access-layer dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Role assigned to requests that carry no actor headers
    pub anonymous_role: String,
    /// Requirement policy for permission checks ("all" or "any")
    pub requirement_policy: String,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            access: AccessConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            anonymous_role: "viewer".to_string(),
            requirement_policy: "all".to_string(),
        }
    }
}

impl BackofficeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> BackofficeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BackofficeError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: BackofficeConfig =
            toml::from_str(&content).map_err(|e| BackofficeError::Config {
                message: format!("Failed to parse config: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("config")
                    .with_operation("parse_toml")
                    .with_suggestion("Check TOML syntax in config file"),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> BackofficeResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| BackofficeError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| BackofficeError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> BackofficeResult<()> {
        if self.server.port == 0 {
            return Err(BackofficeError::Validation {
                message: "Server port must be non-zero".to_string(),
                field: Some("server.port".to_string()),
                context: ErrorContext::new("config")
                    .with_suggestion("Set server.port to a value between 1 and 65535"),
            });
        }

        match self.access.requirement_policy.as_str() {
            "all" | "any" => {}
            other => {
                return Err(BackofficeError::Validation {
                    message: format!("Unknown requirement policy: {}", other),
                    field: Some("access.requirement_policy".to_string()),
                    context: ErrorContext::new("config")
                        .with_suggestion("Use \"all\" or \"any\""),
                });
            }
        }

        Ok(())
    }
}
