//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use std::path::PathBuf;

use serde::Deserialize;

/// Client configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `API_BASE_URL` (required): base URL of the PayPortal backend, e.g.
///   `https://localhost:5000/api`
/// - `REQUEST_TIMEOUT_SECS` (optional): per-request timeout, defaults to 10
/// - `SESSION_FILE` (optional): where the file-backed session store keeps
///   the token between invocations, defaults to `payportal-session.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

/// Default per-request timeout if REQUEST_TIMEOUT_SECS is not set.
fn default_timeout_secs() -> u64 {
    10
}

fn default_session_file() -> PathBuf {
    PathBuf::from("payportal-session.json")
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., API_BASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: api_base_url -> API_BASE_URL
        envy::from_env::<Config>()
    }
}
