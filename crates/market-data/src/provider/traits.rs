//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that upstream
//! market data sources implement.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{BarSet, BarsRequest, LatestQuoteRequest, Quote};

/// Trait for market data providers.
///
/// A provider performs exactly one logical query per call and returns the
/// upstream payload keyed by provider symbol. Mapping to client-facing
/// records happens in [`crate::quotes`], not here.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerbridge_market_data::provider::MarketDataProvider;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement bar and quote methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch historical bars for the request window.
    ///
    /// Bars for each symbol must be ordered by timestamp ascending. Symbols
    /// without data in the window may be absent from the result.
    async fn get_bars(&self, request: &BarsRequest) -> Result<BarSet, MarketDataError>;

    /// Fetch the latest top-of-book quote.
    async fn get_latest_quotes(
        &self,
        request: &LatestQuoteRequest,
    ) -> Result<HashMap<String, Quote>, MarketDataError>;
}
