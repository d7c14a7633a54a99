//! Quote service.
//!
//! Translates client parameters into provider requests, issues exactly one
//! logical upstream query and maps the response:
//! - Historical bars (optional since-keyword)
//! - Latest quote (ask price)

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};

use super::mapper::{map_bars, map_latest_quote};
use crate::errors::Result;
use crate::models::{
    AssetClass, BarsRequest, HistoricalBar, LatestQuote, LatestQuoteRequest, SinceKeyword,
    TimeWindow,
};
use crate::provider::MarketDataProvider;

/// Trait for the quote operations exposed over HTTP.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Historical bars for `symbol`.
    ///
    /// `since` is the raw keyword from the request. `None` means the default
    /// window (last month, daily). An unknown keyword fails with
    /// `InvalidTimeWindow` before the provider is called.
    async fn get_historical_bars(
        &self,
        asset_class: AssetClass,
        symbol: &str,
        since: Option<&str>,
    ) -> Result<Vec<HistoricalBar>>;

    /// Current ask price for `symbol`.
    async fn get_latest_quote(&self, asset_class: AssetClass, symbol: &str) -> Result<LatestQuote>;
}

/// Quote service backed by a single shared provider.
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Builds the upstream bars request for the caller's parameters.
    pub fn build_bars_request(
        asset_class: AssetClass,
        symbol: &str,
        since: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<BarsRequest> {
        let keyword = since.map(str::parse::<SinceKeyword>).transpose()?;
        let window = TimeWindow::resolve(keyword, now);
        Ok(BarsRequest::new(asset_class, symbol, window))
    }

    pub(crate) async fn historical_bars_at(
        &self,
        asset_class: AssetClass,
        symbol: &str,
        since: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<HistoricalBar>> {
        let request = Self::build_bars_request(asset_class, symbol, since, now)?;
        info!(
            "Fetching {} {} bars for {} from {}",
            request.granularity,
            asset_class.as_str(),
            request.symbol,
            self.provider.id()
        );

        let bar_set = self.provider.get_bars(&request).await?;
        let bars = map_bars(bar_set, &request.symbol)?;
        debug!("Mapped {} bars for {}", bars.len(), request.symbol);
        Ok(bars)
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_historical_bars(
        &self,
        asset_class: AssetClass,
        symbol: &str,
        since: Option<&str>,
    ) -> Result<Vec<HistoricalBar>> {
        self.historical_bars_at(asset_class, symbol, since, Utc::now())
            .await
    }

    async fn get_latest_quote(&self, asset_class: AssetClass, symbol: &str) -> Result<LatestQuote> {
        let request = LatestQuoteRequest::new(asset_class, symbol);
        info!(
            "Fetching latest {} quote for {} from {}",
            asset_class.as_str(),
            request.symbol,
            self.provider.id()
        );

        let quotes = self.provider.get_latest_quotes(&request).await?;
        map_latest_quote(&quotes, &request.symbol)
    }
}
