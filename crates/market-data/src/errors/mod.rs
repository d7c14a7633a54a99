//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`ErrorKind`]: Classification used by the HTTP layer to pick a status code

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Each variant is classified into an [`ErrorKind`] via the [`kind`](Self::kind)
/// method. Only [`MarketDataError::InvalidTimeWindow`] is caused by the caller;
/// everything else is an upstream failure.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The caller supplied a since-keyword outside `day`/`week`/`month`/`year`.
    /// Raised before any upstream call is made.
    #[error("Invalid since time: {0}")]
    InvalidTimeWindow(String),

    /// The provider response did not contain the requested symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rejected our credentials (HTTP 401/403).
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the request
        provider: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (bad status, unparsable body).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tickerbridge_market_data::errors::{ErrorKind, MarketDataError};
    ///
    /// let error = MarketDataError::InvalidTimeWindow("decade".to_string());
    /// assert_eq!(error.kind(), ErrorKind::InvalidTimeWindow);
    ///
    /// let error = MarketDataError::RateLimited { provider: "ALPACA".to_string() };
    /// assert_eq!(error.kind(), ErrorKind::UpstreamFailure);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTimeWindow(_) => ErrorKind::InvalidTimeWindow,

            Self::SymbolNotFound(_)
            | Self::Unauthorized { .. }
            | Self::RateLimited { .. }
            | Self::Timeout { .. }
            | Self::ProviderError { .. }
            | Self::Network(_) => ErrorKind::UpstreamFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, MarketDataError>;
