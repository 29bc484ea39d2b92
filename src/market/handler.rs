use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::market::{
  model::Quote,
  registry::SymbolRegistry,
  service::MarketService,
};

#[derive(Clone)]
pub struct StocksState {
  pub service: MarketService,
  pub registry: Arc<SymbolRegistry>,
}

impl StocksState {
  pub fn new(service: MarketService, registry: SymbolRegistry) -> Self {
      Self {
          service,
          registry: Arc::new(registry),
      }
  }
}

/// Queries every registered instrument in turn, dropping the ones that fail.
pub async fn collect_quotes(service: &MarketService, registry: &SymbolRegistry) -> Vec<Quote> {
  let mut quotes = Vec::with_capacity(registry.len());

  for instrument in registry.iter() {
      match service.fetch_price(&instrument.symbol).await {
          Ok(price) => quotes.push(Quote {
              symbol: instrument.name.clone(),
              current_price: price,
          }),
          Err(e) => {
              warn!(
                  instrument = %instrument.name,
                  symbol = %instrument.symbol,
                  error = %e,
                  "Error fetching price"
              );
          }
      }
  }

  info!("Fetched {} of {} quotes", quotes.len(), registry.len());

  quotes
}

// GET /api/stocks
pub async fn get_stocks(State(state): State<StocksState>) -> Json<Vec<Quote>> {
  Json(collect_quotes(&state.service, &state.registry).await)
}
