use axum::{routing::get, Router};

use crate::market::{handler, handler::StocksState};

pub fn market_routes(state: StocksState) -> Router {
  Router::new()
      .route("/stocks", get(handler::get_stocks))
      .with_state(state)
}
