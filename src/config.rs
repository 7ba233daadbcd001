//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! None. The service starts with defaults and degrades to synthetic search
//! data when the Google Custom Search credentials are absent.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `CORS_ORIGIN` - Permitted cross-origin source (default: `*`)
//! - `STORAGE_PATH` - Submission storage file (default: `data/submissions.json`)
//! - `GOOGLE_API_KEY` / `GOOGLE_SEARCH_ENGINE_ID` - Custom Search credentials;
//!   both must be set to enable live search lookups
//! - `METRICS_MODE` - Generator selection: `web` or `deterministic` (default: `web`)
//! - `FETCH_TIMEOUT_SECS` - Outbound HTTP timeout (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which metrics generator backs the submit endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsMode {
    /// Website scrape plus search lookup, with randomized fallbacks.
    Web,
    /// Pure hash-driven synthesis, no I/O.
    Deterministic,
}

impl FromStr for MetricsMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "web" => Ok(Self::Web),
            "deterministic" => Ok(Self::Deterministic),
            other => anyhow::bail!("METRICS_MODE must be 'web' or 'deterministic', got '{other}'"),
        }
    }
}

/// Google Custom Search credentials. Both halves are required for live search.
#[derive(Debug, Clone)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub cors_origin: String,
    pub storage_path: PathBuf,
    /// `None` routes search lookups through the randomized fallback.
    pub search_credentials: Option<SearchCredentials>,
    pub metrics_mode: MetricsMode,
    /// Timeout in seconds for each outbound call (website fetch, search API).
    pub fetch_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `METRICS_MODE` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let storage_path = env::var("STORAGE_PATH")
            .unwrap_or_else(|_| "data/submissions.json".to_string())
            .into();

        let search_credentials = Self::load_search_credentials();

        let metrics_mode = env::var("METRICS_MODE")
            .unwrap_or_else(|_| "web".to_string())
            .parse()
            .context("Failed to parse METRICS_MODE")?;

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            cors_origin,
            storage_path,
            search_credentials,
            metrics_mode,
            fetch_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Loads Google Custom Search credentials.
    ///
    /// Returns `None` unless both `GOOGLE_API_KEY` and
    /// `GOOGLE_SEARCH_ENGINE_ID` are set and non-empty; a half-configured
    /// pair is treated as absent.
    fn load_search_credentials() -> Option<SearchCredentials> {
        let api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        let engine_id = env::var("GOOGLE_SEARCH_ENGINE_ID").unwrap_or_default();

        match (api_key.is_empty(), engine_id.is_empty()) {
            (false, false) => Some(SearchCredentials { api_key, engine_id }),
            (true, true) => None,
            _ => {
                tracing::warn!(
                    "Only one of GOOGLE_API_KEY / GOOGLE_SEARCH_ENGINE_ID is set; \
                     search lookups will use fallback data"
                );
                None
            }
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `cors_origin` is not `*` and not a valid header value
    /// - `storage_path` is empty
    /// - `fetch_timeout_secs` is 0 or above 300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.cors_origin != "*" && self.cors_origin.parse::<HeaderValue>().is_err() {
            anyhow::bail!(
                "CORS_ORIGIN must be '*' or a valid origin, got '{}'",
                self.cors_origin
            );
        }

        if self.storage_path.as_os_str().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.fetch_timeout_secs == 0 || self.fetch_timeout_secs > 300 {
            anyhow::bail!(
                "FETCH_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.fetch_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns whether live search lookups are enabled.
    pub fn is_search_enabled(&self) -> bool {
        self.search_credentials.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  CORS origin: {}", self.cors_origin);
        tracing::info!("  Storage file: {}", self.storage_path.display());
        tracing::info!("  Metrics mode: {:?}", self.metrics_mode);

        if self.is_search_enabled() {
            tracing::info!("  Search API: enabled");
        } else {
            tracing::info!("  Search API: disabled (fallback data)");
        }

        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
