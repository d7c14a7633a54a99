use std::sync::Arc;

use crate::config::Config;
use tickerbridge_market_data::{
    AlpacaProvider, MarketDataProvider, QuoteService, QuoteServiceTrait,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the shared state. One HTTP client is created here and reused for
/// every upstream call.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = AlpacaProvider::new(config.alpaca.clone())?;
    tracing::info!(
        "Using Alpaca market data at {} (feed: {})",
        config.alpaca.base_url,
        config.alpaca.stock_feed.as_deref().unwrap_or("default")
    );
    Ok(build_state_with_provider(Arc::new(provider)))
}

pub fn build_state_with_provider(provider: Arc<dyn MarketDataProvider>) -> Arc<AppState> {
    let quote_service = Arc::new(QuoteService::new(provider));
    Arc::new(AppState { quote_service })
}
