use std::env;

use tracing::Level;

/// Process-level settings read from the environment. Per-invocation
/// settings travel in the request payload instead.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL used when a request does not carry one (`BASE_URL`).
    pub base_url: String,
    /// Log level for the JSON subscriber (`LOG_LEVEL`, default `info`).
    pub log_level: Level,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("BASE_URL").ok(), env::var("LOG_LEVEL").ok())
    }

    pub fn from_vars(base_url: Option<String>, log_level: Option<String>) -> Self {
        let log_level = log_level
            .and_then(|raw| raw.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);
        Self { base_url: base_url.unwrap_or_default(), log_level }
    }
}
