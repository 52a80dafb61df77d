//! API configuration.

use std::time::Duration;

use emoticam_curation::SelectorKind;
use tracing::warn;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Rate limit requests per second, per client IP
    pub rate_limit_rps: u32,
    /// Timeout for outbound requests to the video platform and vision model
    pub request_timeout: Duration,
    /// Max request body size (webcam photos arrive as base64 JSON)
    pub max_body_size: usize,
    /// YouTube Data API key; the search endpoint refuses to run without it
    pub youtube_api_key: Option<String>,
    /// YouTube Data API root
    pub youtube_base_url: String,
    /// Vision model API key
    pub vision_api_key: Option<String>,
    /// Vision model API root
    pub vision_base_url: String,
    /// Vision model name
    pub vision_model: String,
    /// Query selection strategy
    pub query_selector: SelectorKind,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            rate_limit_rps: 10,
            request_timeout: Duration::from_secs(30),
            max_body_size: 10 * 1024 * 1024, // 10MB
            youtube_api_key: None,
            youtube_base_url: emoticam_youtube::DEFAULT_BASE_URL.to_string(),
            vision_api_key: None,
            vision_base_url: emoticam_vision::DEFAULT_BASE_URL.to_string(),
            vision_model: emoticam_vision::DEFAULT_MODEL.to_string(),
            query_selector: SelectorKind::First,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            rate_limit_rps: std::env::var("RATE_LIMIT_RPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rate_limit_rps),
            request_timeout: std::env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            youtube_api_key: non_empty_var("YOUTUBE_API_KEY"),
            youtube_base_url: non_empty_var("YOUTUBE_API_BASE_URL")
                .unwrap_or(defaults.youtube_base_url),
            vision_api_key: non_empty_var("OPENAI_API_KEY"),
            vision_base_url: non_empty_var("OPENAI_BASE_URL").unwrap_or(defaults.vision_base_url),
            vision_model: non_empty_var("VISION_MODEL").unwrap_or(defaults.vision_model),
            query_selector: parse_selector(std::env::var("QUERY_SELECTOR").ok()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_selector(value: Option<String>) -> SelectorKind {
    match value {
        None => SelectorKind::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("{}, using default", e);
            SelectorKind::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 8000);
        assert!(config.youtube_api_key.is_none());
        assert_eq!(config.query_selector, SelectorKind::First);
        assert_eq!(config.max_body_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(parse_selector(None), SelectorKind::First);
        assert_eq!(parse_selector(Some("ranked".to_string())), SelectorKind::Ranked);
        assert_eq!(parse_selector(Some("bogus".to_string())), SelectorKind::First);
    }
}
