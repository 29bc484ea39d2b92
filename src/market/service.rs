use reqwest::{Client, Url};
use tracing::debug;

use crate::{config::Config, error::AppError, market::model::GlobalQuoteResponse};

#[derive(Clone)]
pub struct MarketService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MarketService {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.provider_url.clone(), config.api_key.clone())
    }

    /// Fetches the latest traded price for a provider ticker.
    ///
    /// Makes exactly one outbound request per call; nothing is cached or
    /// retried.
    pub async fn fetch_price(&self, symbol: &str) -> Result<f64, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::ConfigError("API_KEY not set".into()))?;

        if symbol.trim().is_empty() {
            return Err(AppError::ConfigError("Ticker symbol must not be empty".into()));
        }

        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", api_key),
            ],
        )
        .map_err(|e| AppError::NetworkError(format!("Failed to build URL: {}", e)))?;

        debug!(symbol, "Requesting global quote");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamError(format!("API response: {}", status)));
        }

        let body = response.text().await?;

        GlobalQuoteResponse::from_body(&body)?.price()
    }
}
