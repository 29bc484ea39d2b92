use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
  config::Config,
  market::{
    handler::StocksState,
    registry::SymbolRegistry,
    routes::market_routes,
    service::MarketService,
  },
};

pub fn create_router(config: &Config) -> Router {
  create_router_with(
    config,
    MarketService::from_config(config),
    SymbolRegistry::default(),
  )
}

/// Same as [`create_router`] with an explicit quote source and instrument set.
pub fn create_router_with(
  config: &Config,
  service: MarketService,
  registry: SymbolRegistry,
) -> Router {
  let state = StocksState::new(service, registry);

  // Anything outside /api is a frontend asset
  let assets = ServeDir::new(&config.static_dir);

  Router::new()
      .nest("/api", market_routes(state))
      .fallback_service(assets)
      .layer(TraceLayer::new_for_http())
}
