use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_PROVIDER_URL: &str = "https://www.alphavantage.co/query";
/// Used when `RUST_LOG` is unset. `TraceLayer` logs requests at debug.
pub const DEFAULT_LOG_FILTER: &str = "stock_ticker=info,tower_http=debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub provider_url: String,
    pub api_key: Option<String>,
}

impl Config {
    /// Reads `API_KEY` from the process environment. Everything else is fixed.
    pub fn from_env() -> Self {
        Self::with_api_key(env::var("API_KEY").ok())
    }

    pub fn with_api_key(api_key: Option<String>) -> Self {
        // An empty key is as good as none
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        assert!(!Config::with_api_key(Some("   ".into())).has_api_key());
        assert!(!Config::with_api_key(None).has_api_key());
    }

    #[test]
    fn fixed_listener_and_asset_settings() {
        let config = Config::with_api_key(Some("demo".into()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.provider_url, DEFAULT_PROVIDER_URL);
        assert_eq!(config.api_key.as_deref(), Some("demo"));
    }

    #[test]
    fn default_log_filter_shows_request_traces() {
        assert!(DEFAULT_LOG_FILTER.contains("tower_http=debug"));
        assert!(DEFAULT_LOG_FILTER.parse::<tracing_subscriber::EnvFilter>().is_ok());
    }
}
