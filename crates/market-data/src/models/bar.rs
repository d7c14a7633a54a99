use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Format of [`HistoricalBar::date`].
pub const BAR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// OHLC bar as returned by a provider.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Start of the bar interval
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Provider bars keyed by provider symbol, each list oldest first.
pub type BarSet = HashMap<String, Vec<Bar>>;

/// Historical price record served to clients.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoricalBar {
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Bar timestamp in UTC, `YYYY-MM-DD HH:mm:ss`
    pub date: String,
}

impl HistoricalBar {
    pub fn from_bar(symbol: &str, bar: &Bar) -> Self {
        Self {
            symbol: symbol.to_string(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            date: bar.timestamp.format(BAR_DATE_FORMAT).to_string(),
        }
    }
}
