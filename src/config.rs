// src/config.rs

use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use chrono::Locale;
use dotenvy::dotenv;
use url::Url;

use crate::error::AppError;

/// Number of ranking rows the ranking API returns at most.
pub const RANKING_WINDOW: usize = 30;

/// Name of the cookie that ties a browser to its view session.
pub const SESSION_COOKIE: &str = "ranking_session";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ranking API. Every route is resolved against it.
    pub api_url: Url,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    /// Locale used to display exam dates.
    pub display_locale: Locale,
    /// Timeout applied to every call to the ranking API.
    pub request_timeout: Duration,
    /// Body limit for bulk uploads, in bytes.
    pub max_upload_bytes: usize,
    /// View sessions untouched for longer than this are torn down.
    pub session_idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let raw_api_url =
            env::var("API_URL").map_err(|_| AppError::Config("API_URL must be set".to_string()))?;
        let api_url = Url::parse(&raw_api_url)
            .map_err(|e| AppError::Config(format!("API_URL is not a valid URL: {}", e)))?;

        let bind_addr = var_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let locale_name = env::var("DISPLAY_LOCALE").unwrap_or_else(|_| "en_US".to_string());
        let display_locale = parse_locale(&locale_name)?;

        let request_timeout = Duration::from_secs(var_or("REQUEST_TIMEOUT_SECS", 10u64)?);
        let max_upload_bytes = var_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024usize)?;
        let session_idle_timeout = Duration::from_secs(var_or("SESSION_IDLE_SECS", 1800u64)?);

        Ok(Self {
            api_url,
            bind_addr,
            rust_log,
            display_locale,
            request_timeout,
            max_upload_bytes,
            session_idle_timeout,
        })
    }

    /// Configuration with defaults for everything except the API location.
    pub fn with_api_url(api_url: Url) -> Self {
        Self {
            api_url,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            rust_log: "info".to_string(),
            display_locale: Locale::en_US,
            request_timeout: Duration::from_secs(10),
            max_upload_bytes: 10 * 1024 * 1024,
            session_idle_timeout: Duration::from_secs(1800),
        }
    }
}

/// Parses a POSIX style locale name such as `en_US` or `de_DE`.
pub fn parse_locale(name: &str) -> Result<Locale, AppError> {
    Locale::try_from(name)
        .map_err(|_| AppError::Config(format!("DISPLAY_LOCALE '{}' is not a known locale", name)))
}

fn var_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", key, e))),
        Err(_) => Ok(default),
    }
}
