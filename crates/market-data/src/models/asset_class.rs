/// Quote currency every crypto pair is priced in.
pub const CRYPTO_QUOTE_CURRENCY: &str = "USD";

/// Asset class of a requested symbol.
///
/// Determines which upstream endpoints are queried and how the caller's
/// symbol is turned into a provider symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AssetClass {
    /// Listed equities (`AAPL`, `MSFT`). Symbols are passed through verbatim.
    Equity,
    /// Crypto pairs quoted in USD (`BTC/USD`).
    Crypto,
}

impl AssetClass {
    /// Turns the caller's symbol into the symbol sent upstream and echoed in
    /// every response record.
    ///
    /// Equities are left untouched. Crypto tickers are upper-cased and paired
    /// with [`CRYPTO_QUOTE_CURRENCY`].
    pub fn normalize_symbol(&self, symbol: &str) -> String {
        match self {
            AssetClass::Equity => symbol.to_string(),
            AssetClass::Crypto => {
                format!("{}/{}", symbol.to_uppercase(), CRYPTO_QUOTE_CURRENCY)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Crypto => "crypto",
        }
    }
}
