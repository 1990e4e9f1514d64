//! Configuration for page fetching
//!
//! Defines settings for the HTTP request, redirect handling, and
//! optional body stripping.

use std::env;

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; FabstirBot/1.0; +https://fabstir.com)";

/// Configuration for page fetching
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in milliseconds, reset per redirect hop (default: 30000)
    pub timeout_ms: u64,
    /// Maximum redirect hops to follow (default: 5)
    pub max_redirects: usize,
    /// Remove `<script>` blocks from the returned body (default: false)
    pub strip_scripts: bool,
    /// Remove `<style>` blocks from the returned body (default: false)
    pub strip_styles: bool,
}

impl FetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            user_agent: env::var("FETCH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            max_redirects: env::var("FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5)
                .min(10), // Cap at 10
            strip_scripts: env::var("FETCH_STRIP_SCRIPTS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            strip_styles: env::var("FETCH_STRIP_STYLES")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be at least 1".to_string());
        }
        if self.user_agent.is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: 30_000,
            max_redirects: 5,
            strip_scripts: false,
            strip_styles: false,
        }
    }
}
