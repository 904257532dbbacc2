//! Application configuration module
//!
//! Provides the configuration object that is built once at startup and
//! handed to the server. Nothing reads process-wide settings after that:
//! the signing secret, database location and paging limits all travel
//! inside `AppConfig`.
//!
//! # Sources
//!
//! - `AppConfig::builder()` for programmatic construction (tests, embedding)
//! - `AppConfig::from_env()` for the server binary (after `.env` is loaded)
//!
//! | Variable          | Default                   |
//! |-------------------|---------------------------|
//! | `DATABASE_URL`    | `sqlite://conduit.db`     |
//! | `JWT_SECRET`      | development fallback      |
//! | `TOKEN_TTL_HOURS` | `168`                     |
//! | `SERVER_HOST`     | `0.0.0.0`                 |
//! | `SERVER_PORT`     | `8080`                    |
//! | `MAX_PAGE_SIZE`   | `100`                     |
//! | `BCRYPT_COST`     | `bcrypt::DEFAULT_COST`    |

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// Default number of articles per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default ceiling for the caller-supplied `limit`
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Default token lifetime (7 days)
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24 * 7;

const DEFAULT_DATABASE_URL: &str = "sqlite://conduit.db";
const DEV_JWT_SECRET: &str = "conduit-development-secret-change-me";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection URL (`sqlite://…` or `sqlite::memory:`)
    pub database_url: String,
    /// HMAC secret used to sign and verify tokens
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub token_ttl_hours: u64,
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Upper bound applied to the `limit` query parameter
    pub max_page_size: u32,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults. Variables that are set
    /// but cannot be parsed are reported as `ConfigError::InvalidValue`.
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let mut builder = AppConfig::builder();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
            }
        }
        if let Some(hours) = parse_env::<u64>("TOKEN_TTL_HOURS")? {
            builder = builder.token_ttl_hours(hours);
        }
        if let Ok(host) = std::env::var("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = parse_env::<u16>("SERVER_PORT")? {
            builder = builder.port(port);
        }
        if let Some(max) = parse_env::<u32>("MAX_PAGE_SIZE")? {
            builder = builder.max_page_size(max);
        }
        if let Some(cost) = parse_env::<u32>("BCRYPT_COST")? {
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                value: "0".to_string(),
            });
        }
        if self.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_PAGE_SIZE",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }

    /// Socket address the server should bind
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "SERVER_HOST",
            value: raw,
        })
    }
}

fn parse_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_hours: Option<u64>,
    host: Option<String>,
    port: Option<u16>,
    max_page_size: Option<u32>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in hours
    pub fn token_ttl_hours(mut self, hours: u64) -> Self {
        self.token_ttl_hours = Some(hours);
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the ceiling for the `limit` query parameter
    pub fn max_page_size(mut self, max: u32) -> Self {
        self.max_page_size = Some(max);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            token_ttl_hours: self.token_ttl_hours.unwrap_or(defaults.token_ttl_hours),
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            max_page_size: self.max_page_size.unwrap_or(defaults.max_page_size),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
