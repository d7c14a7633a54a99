//! Alpaca market data provider implementation.
//!
//! Serves both equities and crypto from the Alpaca data API using key/secret
//! header authentication.
//!
//! # API Endpoints
//!
//! - Stock bars: `{base}/v2/stocks/bars?symbols=AAPL&timeframe=1Day&start=..&end=..`
//! - Stock latest quote: `{base}/v2/stocks/quotes/latest?symbols=AAPL`
//! - Crypto bars: `{base}/v1beta3/crypto/us/bars?symbols=BTC/USD&timeframe=1Day&start=..&end=..`
//! - Crypto latest quote: `{base}/v1beta3/crypto/us/latest/quotes?symbols=BTC/USD`
//!
//! # Pagination
//!
//! Bars responses carry a `next_page_token`. The provider keeps requesting
//! pages until the token is null and concatenates bars per symbol, so callers
//! always see the full window in upstream order.

mod models;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::MarketDataError;
use crate::models::{AssetClass, Bar, BarSet, BarsRequest, LatestQuoteRequest, Quote};
use crate::provider::MarketDataProvider;

use models::{AlpacaBarsResponse, AlpacaErrorResponse, AlpacaLatestQuotesResponse};

pub const DEFAULT_BASE_URL: &str = "https://data.alpaca.markets";
const PROVIDER_ID: &str = "ALPACA";

const KEY_ID_HEADER: &str = "APCA-API-KEY-ID";
const SECRET_KEY_HEADER: &str = "APCA-API-SECRET-KEY";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest page size the bars endpoints accept
const PAGE_LIMIT: u32 = 10_000;

/// Upper bound on followed pages per query
const MAX_PAGES: usize = 100;

/// Connection settings for [`AlpacaProvider`].
#[derive(Clone)]
pub struct AlpacaConfig {
    pub key_id: String,
    pub secret_key: String,
    pub base_url: String,
    /// Equity data feed (`iex`, `sip`, ...). Provider default when `None`.
    pub stock_feed: Option<String>,
    pub timeout: Duration,
}

impl AlpacaConfig {
    pub fn new(key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            stock_feed: None,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_stock_feed(mut self, feed: Option<String>) -> Self {
        self.stock_feed = feed;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for AlpacaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlpacaConfig")
            .field("key_id", &self.key_id)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("stock_feed", &self.stock_feed)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Alpaca provider for fetching equity and crypto market data.
///
/// # Example
///
/// ```ignore
/// let provider = AlpacaProvider::new(AlpacaConfig::new("key-id", "secret"))?;
/// let bars = provider.get_bars(&request).await?;
/// ```
pub struct AlpacaProvider {
    client: Client,
    config: AlpacaConfig,
}

impl AlpacaProvider {
    /// Create a provider with a dedicated HTTP client.
    pub fn new(config: AlpacaConfig) -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn bars_path(asset_class: AssetClass) -> &'static str {
        match asset_class {
            AssetClass::Equity => "/v2/stocks/bars",
            AssetClass::Crypto => "/v1beta3/crypto/us/bars",
        }
    }

    fn latest_quotes_path(asset_class: AssetClass) -> &'static str {
        match asset_class {
            AssetClass::Equity => "/v2/stocks/quotes/latest",
            AssetClass::Crypto => "/v1beta3/crypto/us/latest/quotes",
        }
    }

    fn format_time(time: DateTime<Utc>) -> String {
        time.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Query parameters shared by every page of a bars request.
    fn bars_query(&self, request: &BarsRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("symbols", request.symbol.clone()),
            ("timeframe", request.granularity.as_timeframe().to_string()),
            ("start", Self::format_time(request.start)),
            ("end", Self::format_time(request.end)),
            ("limit", PAGE_LIMIT.to_string()),
        ];
        self.push_feed(request.asset_class, &mut query);
        query
    }

    fn push_feed(&self, asset_class: AssetClass, query: &mut Vec<(&'static str, String)>) {
        if asset_class == AssetClass::Equity {
            if let Some(feed) = &self.config.stock_feed {
                query.push(("feed", feed.clone()));
            }
        }
    }

    /// Issue an authenticated GET and decode the JSON body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, MarketDataError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .header(KEY_ID_HEADER, &self.config.key_id)
            .header(SECRET_KEY_HEADER, &self.config.secret_key)
            .query(query)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(MarketDataError::Unauthorized {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            _ => {}
        }

        let body = response.text().await.map_err(Self::transport_error)?;

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: Self::error_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse response: {}", e),
        })
    }

    fn transport_error(error: reqwest::Error) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(error)
        }
    }

    /// Prefer the provider's own message; fall back to the status line.
    fn error_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<AlpacaErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .map(|message| format!("HTTP {}: {}", status.as_u16(), message))
            .unwrap_or_else(|| format!("HTTP error: {}", status))
    }
}

#[async_trait]
impl MarketDataProvider for AlpacaProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_bars(&self, request: &BarsRequest) -> Result<BarSet, MarketDataError> {
        let path = Self::bars_path(request.asset_class);
        let base_query = self.bars_query(request);

        let mut bar_set: BarSet = HashMap::new();
        let mut page_token: Option<String> = None;

        for page in 1..=MAX_PAGES {
            let mut query = base_query.clone();
            if let Some(token) = &page_token {
                query.push(("page_token", token.clone()));
            }

            let response: AlpacaBarsResponse = self.fetch(path, &query).await?;
            for (symbol, bars) in response.bars.unwrap_or_default() {
                bar_set
                    .entry(symbol)
                    .or_default()
                    .extend(bars.into_iter().map(Bar::from));
            }

            page_token = response.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() {
                debug!(
                    "Fetched {} bars for {} in {} page(s)",
                    bar_set.values().map(Vec::len).sum::<usize>(),
                    request.symbol,
                    page
                );
                return Ok(bar_set);
            }
        }

        warn!(
            "Stopped paging bars for {} after {} pages; result is truncated",
            request.symbol, MAX_PAGES
        );
        Ok(bar_set)
    }

    async fn get_latest_quotes(
        &self,
        request: &LatestQuoteRequest,
    ) -> Result<HashMap<String, Quote>, MarketDataError> {
        let path = Self::latest_quotes_path(request.asset_class);
        let mut query = vec![("symbols", request.symbol.clone())];
        self.push_feed(request.asset_class, &mut query);

        let response: AlpacaLatestQuotesResponse = self.fetch(path, &query).await?;
        Ok(response
            .quotes
            .into_iter()
            .map(|(symbol, quote)| (symbol, Quote::from(quote)))
            .collect())
    }
}
