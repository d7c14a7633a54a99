/// Classification of market data failures.
///
/// The HTTP layer maps each class to a response:
///
/// | Class | Status | Body |
/// |-------|--------|------|
/// | `InvalidTimeWindow` | 400 | plain text `Invalid since time` |
/// | `UpstreamFailure` | 500 | generic error, details only in logs |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller asked for a time window we don't know about.
    /// Recoverable at the boundary; no upstream call was made.
    InvalidTimeWindow,

    /// Anything that went wrong talking to the provider: auth, network,
    /// unknown symbol, rate limit, malformed response.
    UpstreamFailure,
}
