use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;
use pripals_core::image::DEFAULT_MAX_UPLOAD_BYTES;
use pripals_core::league::LeaguePolicy;
use pripals_core::ledger::DEFAULT_HISTORY_LIMIT;

/// A configuration variable that was present but unusable.
#[derive(Debug, thiserror::Error)]
#[error("{var} is invalid: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite database URL.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How ranked friends are split into leagues (default: `fixed:3,5`).
    pub league_policy: LeaguePolicy,
    /// History window used when a request gives no usable `limit` (default: `10`).
    pub history_default_limit: i64,
    /// Largest accepted profile image, in bytes (default: 5 MiB).
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            database_url: "sqlite://pripals.db?mode=rwc".to_string(),
            cors_origins: vec![
                HeaderValue::from_static("http://localhost:8080"),
                HeaderValue::from_static("http://127.0.0.1:8080"),
            ],
            request_timeout_secs: 30,
            league_policy: LeaguePolicy::default(),
            history_default_limit: DEFAULT_HISTORY_LIMIT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                       |
    /// |-------------------------|-----------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                     |
    /// | `PORT`                  | `8000`                                        |
    /// | `DATABASE_URL`          | `sqlite://pripals.db?mode=rwc`                |
    /// | `CORS_ORIGINS`          | `http://localhost:8080,http://127.0.0.1:8080` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                          |
    /// | `LEAGUE_POLICY`         | `fixed:3,5`                                   |
    /// | `HISTORY_DEFAULT_LIMIT` | `10`                                          |
    /// | `MAX_UPLOAD_BYTES`      | `5242880`                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&lookup, "HOST", defaults.host)?;
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_origins,
        };

        let request_timeout_secs =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;

        let league_policy = match lookup("LEAGUE_POLICY") {
            Some(raw) => raw.parse().map_err(|e: pripals_core::error::CoreError| ConfigError {
                var: "LEAGUE_POLICY",
                reason: e.to_string(),
            })?,
            None => defaults.league_policy,
        };

        let history_default_limit =
            parse_or(&lookup, "HISTORY_DEFAULT_LIMIT", defaults.history_default_limit)?;
        if history_default_limit <= 0 {
            return Err(ConfigError {
                var: "HISTORY_DEFAULT_LIMIT",
                reason: "must be a positive integer".to_string(),
            });
        }

        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            league_policy,
            history_default_limit,
            max_upload_bytes,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            var,
            reason: format!("'{raw}': {e}"),
        }),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError {
                var: "CORS_ORIGINS",
                reason: format!("'{origin}': {e}"),
            })
        })
        .collect()
}
