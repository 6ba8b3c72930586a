//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::{net::SocketAddr, path::PathBuf, time::Duration};

/// Longest accepted simulated submit delay
const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Optional JSON seed replacing the built-in one
    pub seed_file: Option<PathBuf>,
    /// Site settings
    pub site: SiteConfig,
    /// Prometheus listener, disabled when `None`
    pub metrics_bind: Option<SocketAddr>,
}

/// Settings the page views and create flow read
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Title shown in the shell header
    pub title: String,
    /// Whether admin edit mode is on at startup
    pub edit_mode: bool,
    /// Simulated delay before a submitted tournament is committed
    pub submit_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Chess Registry".to_string(),
            edit_mode: false,
            submit_delay: chess_registry::create::DEFAULT_SUBMIT_DELAY,
        }
    }
}

/// Values given on the command line; they win over the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<SocketAddr>,
    pub seed_file: Option<PathBuf>,
    pub edit_mode: Option<bool>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values parsed from CLI args
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let bind = match overrides.bind {
            Some(bind) => bind,
            None => parse_env_strict("SERVER_BIND")?
                .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080))),
        };

        let seed_file = overrides
            .seed_file
            .or_else(|| std::env::var("SEED_FILE").ok().map(PathBuf::from));

        let metrics_bind = parse_env_strict("METRICS_BIND")?;

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            title: std::env::var("SITE_TITLE").unwrap_or(defaults.title),
            edit_mode: overrides
                .edit_mode
                .unwrap_or_else(|| parse_env_or("EDIT_MODE_DEFAULT", defaults.edit_mode)),
            submit_delay: Duration::from_millis(parse_env_or(
                "SUBMIT_DELAY_MS",
                defaults.submit_delay.as_millis() as u64,
            )),
        };

        Ok(ServerConfig {
            bind,
            seed_file,
            site,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "SITE_TITLE".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.site.submit_delay > Duration::from_millis(MAX_SUBMIT_DELAY_MS) {
            return Err(ConfigError::Invalid {
                var: "SUBMIT_DELAY_MS".to_string(),
                reason: format!("Must be at most {MAX_SUBMIT_DELAY_MS}"),
            });
        }

        if Some(self.bind) == self.metrics_bind {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from server bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse an optional variable, rejecting values that are set but malformed
fn parse_env_strict<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().map(Some).map_err(|e: T::Err| ConfigError::Invalid {
            var: key.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(None),
    }
}
