use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    /// Unset means the HTTP client waits for the model as long as it takes.
    pub request_timeout_secs: Option<u64>,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: var("CAIYU_API_KEY")
                .or_else(|| var("API_KEY"))
                .filter(|key| !key.trim().is_empty()),
            api_base_url: var("CAIYU_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.into()),
            model: var("CAIYU_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            temperature: var("CAIYU_TEMPERATURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.8),
            top_p: var("CAIYU_TOP_P")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.95),
            request_timeout_secs: var("CAIYU_REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()),
            debug: var("DEBUG")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
        }
    }
}
