//! # Server Configuration
//!
//! Loaded from environment variables (after `.env` has been read by the binary) and
//! validated on startup to fail fast if misconfigured.
//!
//! | Variable | Default |
//! |---|---|
//! | `SITE_BIND_ADDRESS` | `127.0.0.1:8080` |
//! | `SITE_DIST_DIR` | `dist` |
//! | `LOG_LEVEL` | `info` |

use std::net::SocketAddr;
use std::path::PathBuf;

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::error::{Error, Result};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Static server configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the server listens on
    pub bind_address: SocketAddr,

    /// Directory holding the built site (`index.html`, the wasm bundle, assets)
    pub dist_dir: PathBuf,

    /// Tracing filter level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let bind_address = get_env_parse_or("SITE_BIND_ADDRESS", DEFAULT_BIND_ADDRESS)
            .map_err(|e| Error::Config(e.to_string()))?;

        let config = Self {
            bind_address,
            dist_dir: PathBuf::from(get_env_or("SITE_DIST_DIR", DEFAULT_DIST_DIR)),
            log_level: get_env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.dist_dir.as_os_str().is_empty() {
            return Err(Error::Config("SITE_DIST_DIR must not be empty".to_string()));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn test_rejects_empty_dist_dir() {
        let config = Config {
            dist_dir: PathBuf::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = Config {
            log_level: "verbose".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("LOG_LEVEL"));
    }
}
