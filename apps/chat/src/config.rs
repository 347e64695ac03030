use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Enables the logging analytics sink. Off by default; when no sink
    /// is configured, tracked events are dropped.
    pub analytics_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analytics_enabled: bool_env("CHAT_ANALYTICS")?,
        })
    }
}

fn bool_env(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<bool>()
            .with_context(|| format!("{key} must be 'true' or 'false', got '{value}'")),
        Err(_) => Ok(false),
    }
}
