use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub genai_model: String,
    pub genai_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Portfolio JSON to load instead of the embedded copy.
    pub portfolio_data_path: Option<PathBuf>,
    /// Result caching is off unless this is set.
    pub result_cache_dir: Option<PathBuf>,
    pub result_cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            genai_model: optional_env("GENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            genai_api_base: optional_env("GENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            portfolio_data_path: optional_env("PORTFOLIO_DATA_PATH").map(PathBuf::from),
            result_cache_dir: optional_env("RESULT_CACHE_DIR").map(PathBuf::from),
            result_cache_ttl_secs: optional_env("RESULT_CACHE_TTL_SECS")
                .unwrap_or_else(|| "3600".to_string())
                .parse::<u64>()
                .context("RESULT_CACHE_TTL_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank both mean "use the default".
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
