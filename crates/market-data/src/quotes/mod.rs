//! Quote operations.
//!
//! - [`service`] - Request building and the `QuoteServiceTrait` used by the server
//! - [`mapper`] - Provider payload to client record mapping
//!
//! ```text
//! QuoteService → MarketDataProvider (Alpaca) → BarSet / quotes → mapper
//! ```

pub mod mapper;
pub mod service;


pub use mapper::{map_bars, map_latest_quote};
pub use service::{QuoteService, QuoteServiceTrait};
