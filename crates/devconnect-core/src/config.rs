//! devconnect configuration management
//!
//! Handles configuration from environment variables and config files with
//! sensible defaults for development. The loaded `AppConfig` is constructed
//! once at startup and passed into the application state; nothing reads the
//! environment after boot.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Token signing configuration
    pub auth: AuthConfig,

    /// GitHub lookup configuration
    pub github: GithubConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port,
            })?;
        }

        // Token signing
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.auth.secret = secret;
        }
        if let Ok(secs) = std::env::var("JWT_EXPIRATION_SECS") {
            config.auth.expiration_secs =
                secs.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "JWT_EXPIRATION_SECS".to_string(),
                    value: secs,
                })?;
        }

        // GitHub
        if let Ok(base) = std::env::var("GITHUB_API_BASE") {
            config.github.api_base = base;
        }
        if let Ok(id) = std::env::var("GITHUB_CLIENT_ID") {
            config.github.client_id = Some(id);
        }
        if let Ok(secret) = std::env::var("GITHUB_CLIENT_SECRET") {
            config.github.client_secret = Some(secret);
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Token signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for HMAC signing
    pub secret: String,

    /// Token lifetime in seconds
    pub expiration_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-change-in-production".to_string(),
            expiration_secs: 360_000,
        }
    }
}

/// GitHub lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// GitHub API base URL
    pub api_base: String,

    /// OAuth client id appended to lookup requests (optional)
    pub client_id: Option<String>,

    /// OAuth client secret appended to lookup requests (optional)
    pub client_secret: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            client_id: None,
            client_secret: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.auth.expiration_secs, 360_000);
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert!(config.github.client_id.is_none());
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.auth.secret, config.auth.secret);
    }
}
