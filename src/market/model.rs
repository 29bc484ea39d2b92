use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One entry of the `/api/stocks` response.
///
/// `symbol` carries the instrument's display name, not its ticker; the
/// frontend looks rows up by that name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub current_price: f64,
}

/// Body of a `GLOBAL_QUOTE` call. The provider answers throttled or
/// malformed requests with 200 and one of the message fields instead of a
/// quote.
#[derive(Debug, Deserialize)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    pub global_quote: Option<GlobalQuote>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "05. price")]
    pub price: Option<String>,
}

impl GlobalQuoteResponse {
    pub fn from_body(body: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn price(&self) -> Result<f64, AppError> {
        let quote = self.global_quote.as_ref().ok_or_else(|| {
            match self.provider_message() {
                Some(message) => AppError::ParseError(format!(
                    "No Global Quote found in response (provider said: {})",
                    message
                )),
                None => AppError::ParseError("No Global Quote found in response".into()),
            }
        })?;

        let raw = quote
            .price
            .as_deref()
            .ok_or_else(|| AppError::ParseError("No price found in Global Quote".into()))?;

        parse_price(raw)
    }

    fn provider_message(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}

/// Parses a provider-encoded price such as `"123.4500"`.
pub fn parse_price(raw: &str) -> Result<f64, AppError> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| AppError::ParseError(format!("Invalid price '{}': {}", raw, e)))?;

    // NaN/inf would serialize as null
    if !price.is_finite() {
        return Err(AppError::ParseError(format!("Invalid price '{}'", raw)));
    }

    Ok(price)
}
