use serde::{Deserialize, Serialize};
use tickerbridge_market_data::{HistoricalBar, LatestQuote};
use utoipa::ToSchema;

/// One OHLC bar. Crypto symbols are reported as `TICKER/USD`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct HistoricalStockResponse {
    #[schema(example = "AAPL")]
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Bar timestamp in UTC, `YYYY-MM-DD HH:mm:ss`
    #[schema(example = "2024-03-11 04:00:00")]
    pub date: String,
}

impl From<HistoricalBar> for HistoricalStockResponse {
    fn from(b: HistoricalBar) -> Self {
        Self {
            symbol: b.symbol,
            open: b.open,
            high: b.high,
            low: b.low,
            close: b.close,
            date: b.date,
        }
    }
}

/// Current ask price.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LatestStockResponse {
    #[schema(example = "ETH/USD")]
    pub symbol: String,
    pub price: f64,
}

impl From<LatestQuote> for LatestStockResponse {
    fn from(q: LatestQuote) -> Self {
        Self {
            symbol: q.symbol,
            price: q.price,
        }
    }
}
