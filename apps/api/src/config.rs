use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// The API key is validated later, when the LLM client is initialized.
#[derive(Clone)]
pub struct Config {
    pub google_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Optional JSON file replacing the built-in role catalog.
    pub role_profiles_path: Option<PathBuf>,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            google_api_key: get("GOOGLE_API_KEY").unwrap_or_default(),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            role_profiles_path: get("ROLE_PROFILES_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            llm_timeout_secs: match get("LLM_TIMEOUT_SECS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_LLM_TIMEOUT_SECS,
            },
            max_upload_bytes: match get("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}
