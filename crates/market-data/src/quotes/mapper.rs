//! Reshapes provider payloads into client-facing records.

use std::collections::HashMap;

use crate::errors::MarketDataError;
use crate::models::{BarSet, HistoricalBar, LatestQuote, Quote};

/// Maps the bars returned for `symbol` to [`HistoricalBar`]s.
///
/// Upstream order is preserved and prices are copied as-is. A symbol the
/// provider left out of the payload fails with `SymbolNotFound`.
pub fn map_bars(
    mut bar_set: BarSet,
    symbol: &str,
) -> Result<Vec<HistoricalBar>, MarketDataError> {
    let bars = bar_set
        .remove(symbol)
        .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;
    Ok(bars
        .iter()
        .map(|bar| HistoricalBar::from_bar(symbol, bar))
        .collect())
}

/// Picks the quote for `symbol` and keeps only its ask price.
pub fn map_latest_quote(
    quotes: &HashMap<String, Quote>,
    symbol: &str,
) -> Result<LatestQuote, MarketDataError> {
    quotes
        .get(symbol)
        .map(|quote| LatestQuote::from_quote(symbol, quote))
        .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
}
