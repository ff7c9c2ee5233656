//! Configuration types.

use std::time::Duration;

/// App configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Model identifier passed to the LLM backend.
    pub model: String,
    /// Minimum time the growing screen stays visible, even if generation
    /// resolves instantly.
    pub growing_floor: Duration,
    /// Hard timeout for the generation request.
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            growing_floor: Duration::from_millis(2500),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Build a config from environment variables, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let model = std::env::var("SANTAS_TREE_MODEL").unwrap_or(defaults.model);

        let growing_floor = std::env::var("SANTAS_TREE_GROWING_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.growing_floor);

        let request_timeout = std::env::var("SANTAS_TREE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Self {
            model,
            growing_floor,
            request_timeout,
        }
    }
}
