use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Config error: {0}")]
  ConfigError(String),

  #[error("Network error: {0}")]
  NetworkError(String),

  #[error("Upstream error: {0}")]
  UpstreamError(String),

  #[error("Parse error: {0}")]
  ParseError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      // The request URL carries the API key in its query
      Self::NetworkError(err.without_url().to_string())
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
      Self::ParseError(err.to_string())
  }
}
