//! Alpaca market data API response models.
//!
//! Stock and crypto endpoints share these shapes; stock payloads carry a few
//! extra fields (exchange codes, conditions) that we don't read.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{Bar, Quote};

/// Response from the `/bars` endpoints
#[derive(Debug, Deserialize)]
pub struct AlpacaBarsResponse {
    /// Bars keyed by symbol. `null` when nothing matched the window.
    #[serde(default)]
    pub bars: Option<HashMap<String, Vec<AlpacaBar>>>,
    /// Present when more pages are available
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Single OHLCV bar
#[derive(Debug, Deserialize)]
pub struct AlpacaBar {
    /// Bar start, RFC 3339
    pub t: DateTime<Utc>,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
    // Note: n (trade count) and vw (VWAP) exist but are not used
}

impl From<AlpacaBar> for Bar {
    fn from(bar: AlpacaBar) -> Self {
        Bar {
            timestamp: bar.t,
            open: bar.o,
            high: bar.h,
            low: bar.l,
            close: bar.c,
            volume: bar.v,
        }
    }
}

/// Response from the latest quotes endpoints
#[derive(Debug, Deserialize)]
pub struct AlpacaLatestQuotesResponse {
    #[serde(default)]
    pub quotes: HashMap<String, AlpacaQuote>,
}

/// Top-of-book quote
#[derive(Debug, Deserialize)]
pub struct AlpacaQuote {
    pub t: DateTime<Utc>,
    /// Ask price
    pub ap: f64,
    /// Ask size
    #[serde(rename = "as")]
    pub ask_size: f64,
    /// Bid price
    pub bp: f64,
    /// Bid size
    pub bs: f64,
}

impl From<AlpacaQuote> for Quote {
    fn from(quote: AlpacaQuote) -> Self {
        Quote {
            timestamp: quote.t,
            ask_price: quote.ap,
            ask_size: quote.ask_size,
            bid_price: quote.bp,
            bid_size: quote.bs,
        }
    }
}

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct AlpacaErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
