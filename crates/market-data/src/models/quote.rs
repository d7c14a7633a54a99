use chrono::{DateTime, Utc};
use serde::Serialize;

/// Top-of-book quote as returned by a provider.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub timestamp: DateTime<Utc>,
    /// Lowest price a seller currently accepts
    pub ask_price: f64,
    pub ask_size: f64,
    pub bid_price: f64,
    pub bid_size: f64,
}

/// Current price served to clients.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LatestQuote {
    pub symbol: String,
    /// Ask price at query time
    pub price: f64,
}

impl LatestQuote {
    pub fn from_quote(symbol: &str, quote: &Quote) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: quote.ask_price,
        }
    }
}
