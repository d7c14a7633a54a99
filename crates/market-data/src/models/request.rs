use chrono::{DateTime, Utc};

use super::asset_class::AssetClass;
use super::time_window::{Granularity, TimeWindow};

/// Historical bars query, already translated to provider terms.
#[derive(Clone, Debug, PartialEq)]
pub struct BarsRequest {
    pub asset_class: AssetClass,
    /// Provider symbol (crypto already normalized to `TICKER/USD`)
    pub symbol: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub granularity: Granularity,
}

impl BarsRequest {
    /// Builds a request for the caller's raw symbol over `window`.
    pub fn new(asset_class: AssetClass, symbol: &str, window: TimeWindow) -> Self {
        Self {
            asset_class,
            symbol: asset_class.normalize_symbol(symbol),
            start: window.start,
            end: window.end,
            granularity: window.granularity,
        }
    }
}

/// Latest quote query, already translated to provider terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatestQuoteRequest {
    pub asset_class: AssetClass,
    pub symbol: String,
}

impl LatestQuoteRequest {
    pub fn new(asset_class: AssetClass, symbol: &str) -> Self {
        Self {
            asset_class,
            symbol: asset_class.normalize_symbol(symbol),
        }
    }
}
