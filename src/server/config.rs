use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HTTP_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub http_port: u16,

    /// Fixed seed for reviewer selection; OS-random when unset.
    pub reviewer_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            http_port: optional_var("HTTP_PORT")?.unwrap_or(DEFAULT_HTTP_PORT),
            reviewer_seed: optional_var("REVIEWER_SEED")?,
        })
    }
}

/// Reads and parses an optional environment variable.
///
/// Unset or empty values yield `None`; values that fail to parse are an error.
fn optional_var<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(None);
    };
    if value.trim().is_empty() {
        return Ok(None);
    }

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
