//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait the quote service talks to
//! - The Alpaca market data implementation

mod traits;

pub mod alpaca;

pub use traits::MarketDataProvider;
