//! Application configuration loaded from environment variables.
//!
//! The Gemini API key is the only required setting. Everything else has a
//! sensible default so a fresh checkout runs with just `GEMINI_API_KEY` set.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Secrets ---
    /// Gemini API key (from Google AI Studio)
    pub gemini_api_key: String,

    // --- Environment Variables (non-sensitive) ---
    /// Gemini model used for analysis and tips
    pub gemini_model: String,
    /// Directory for persisted state (`None` keeps everything in memory)
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gemini_api_key: "test_api_key".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GEMINI_API_KEY"))?,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            data_dir: Some(
                env::var("MEALTRACK_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_data_dir()),
            ),
        })
    }
}

/// Platform data directory for persisted state, falling back to `./data`.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("mealtrack"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
