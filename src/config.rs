//! Build-time Configuration
//!
//! The bundle is static, so settings are baked in at compile time:
//! `ALAMO_API_URL`, `ALAMO_LOG_LEVEL`, `ALAMO_TOAST_MS`.

use std::str::FromStr;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_TOAST_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_url: &'static str,
    pub log_level: log::Level,
    /// How long a notification stays on screen
    pub toast_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ALAMO_API_URL"),
            option_env!("ALAMO_LOG_LEVEL"),
            option_env!("ALAMO_TOAST_MS"),
        )
    }

    fn from_values(
        api_url: Option<&'static str>,
        log_level: Option<&str>,
        toast_ms: Option<&str>,
    ) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .and_then(|level| log::Level::from_str(level).ok())
            .unwrap_or(log::Level::Info);
        let toast_ms = toast_ms
            .and_then(|ms| ms.parse().ok())
            .unwrap_or(DEFAULT_TOAST_MS);

        Self { api_url, log_level, toast_ms }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
