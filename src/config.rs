use std::time::Duration;

/// Base URL used when `WANDERGUIDE_API_BASE` was not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Longest voice capture before the recorder is stopped.
pub const VOICE_CAPTURE_LIMIT: Duration = Duration::from_secs(5);

/// Distance from the bottom of the chat scroller, in pixels, past which the
/// "jump to bottom" button is shown.
pub const JUMP_TO_BOTTOM_THRESHOLD_PX: f64 = 200.0;

/// Where the backend lives. Fixed at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads `WANDERGUIDE_API_BASE` as captured by the build script.
    pub fn from_build_env() -> Self {
        match option_env!("WANDERGUIDE_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }

    /// Joins an endpoint path (starting with `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ApiConfig::new("http://example.test/api/");
        assert_eq!(config.url("/health"), "http://example.test/api/health");
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::new(DEFAULT_API_BASE);
        assert_eq!(config.url("/chat"), "http://localhost:8000/api/chat");
    }
}
