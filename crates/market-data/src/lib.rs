//! Tickerbridge Market Data Crate
//!
//! This crate fetches stock and crypto prices from an upstream market data
//! provider and reshapes them into the minimal records served by the
//! Tickerbridge HTTP gateway.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  HTTP handler    | --> |   QuoteService   |  (since-keyword → TimeWindow)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   BarsRequest    |  (provider symbol, start/end, granularity)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Alpaca)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     mapper       |  (HistoricalBar / LatestQuote)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`AssetClass`] - Equity or crypto, owns symbol normalization
//! - [`SinceKeyword`] - `day`/`week`/`month`/`year` window shorthand
//! - [`TimeWindow`] - Resolved start, end and [`Granularity`]
//! - [`HistoricalBar`] - OHLC record served to clients
//! - [`LatestQuote`] - Symbol and ask price served to clients

pub mod errors;
pub mod models;
pub mod provider;
pub mod quotes;

pub use errors::{ErrorKind, MarketDataError};

pub use models::{
    resolve_since_time, AssetClass, Bar, BarSet, BarsRequest, Granularity, HistoricalBar,
    LatestQuote, LatestQuoteRequest, Quote, SinceKeyword, TimeWindow,
};

pub use provider::alpaca::{AlpacaConfig, AlpacaProvider};
pub use provider::MarketDataProvider;

pub use quotes::{QuoteService, QuoteServiceTrait};
