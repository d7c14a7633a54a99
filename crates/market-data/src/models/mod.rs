//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `asset_class` - Equity vs crypto and symbol normalization
//! - `time_window` - Since-keywords, granularity and resolved query windows
//! - `request` - Provider-facing bar and quote requests
//! - `bar` - Provider bars and the client-facing `HistoricalBar`
//! - `quote` - Provider quotes and the client-facing `LatestQuote`

mod asset_class;
mod bar;
mod quote;
mod request;
mod time_window;

pub use asset_class::{AssetClass, CRYPTO_QUOTE_CURRENCY};
pub use bar::{Bar, BarSet, HistoricalBar, BAR_DATE_FORMAT};
pub use quote::{LatestQuote, Quote};
pub use request::{BarsRequest, LatestQuoteRequest};
pub use time_window::{
    resolve_since_time, safe_end, Granularity, SinceKeyword, TimeWindow,
    DEFAULT_LOOKBACK_MONTHS, END_SAFETY_MARGIN_MINUTES,
};
