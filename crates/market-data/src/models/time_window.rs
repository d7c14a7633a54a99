//! Since-keywords, bar granularity and resolved query windows.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Months, Utc};

use crate::errors::MarketDataError;

/// Bars are requested up to this long before "now"; the provider may not
/// have consolidated the most recent minutes yet.
pub const END_SAFETY_MARGIN_MINUTES: i64 = 15;

/// Lookback used when the caller doesn't pass a since-keyword.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 1;

/// Time bucket size of a bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Granularity {
    Hour,
    Day,
    Month,
}

impl Granularity {
    /// Timeframe string understood by the upstream bars endpoints.
    pub fn as_timeframe(&self) -> &'static str {
        match self {
            Granularity::Hour => "1Hour",
            Granularity::Day => "1Day",
            Granularity::Month => "1Month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_timeframe())
    }
}

/// Client-supplied shorthand selecting a historical window.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SinceKeyword {
    Day,
    Week,
    Month,
    Year,
}

impl SinceKeyword {
    pub const ALL: [SinceKeyword; 4] = [
        SinceKeyword::Day,
        SinceKeyword::Week,
        SinceKeyword::Month,
        SinceKeyword::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SinceKeyword::Day => "day",
            SinceKeyword::Week => "week",
            SinceKeyword::Month => "month",
            SinceKeyword::Year => "year",
        }
    }

    /// Bar granularity implied by the keyword.
    pub fn granularity(&self) -> Granularity {
        match self {
            SinceKeyword::Day => Granularity::Hour,
            SinceKeyword::Week | SinceKeyword::Month => Granularity::Day,
            SinceKeyword::Year => Granularity::Month,
        }
    }

    /// Start of the window relative to `now`.
    ///
    /// Month and year offsets are calendar-aware and clamp to the last day of
    /// the target month (Mar 31 minus one month is Feb 28/29).
    pub fn start_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            SinceKeyword::Day => now - Duration::hours(24),
            SinceKeyword::Week => now - Duration::weeks(1),
            SinceKeyword::Month => months_before(now, 1),
            SinceKeyword::Year => months_before(now, 12),
        }
    }

    /// Resolves the keyword to its `(start, granularity)` pair.
    pub fn resolve(&self, now: DateTime<Utc>) -> (DateTime<Utc>, Granularity) {
        (self.start_from(now), self.granularity())
    }
}

impl FromStr for SinceKeyword {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SinceKeyword::ALL
            .into_iter()
            .find(|keyword| keyword.as_str() == s)
            .ok_or_else(|| MarketDataError::InvalidTimeWindow(s.to_string()))
    }
}

impl fmt::Display for SinceKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a raw since-keyword and resolves it against `now`.
///
/// Fails with [`MarketDataError::InvalidTimeWindow`] for anything outside
/// `day`, `week`, `month`, `year`. Matching is case-sensitive.
pub fn resolve_since_time(
    since: &str,
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, Granularity), MarketDataError> {
    let keyword: SinceKeyword = since.parse()?;
    Ok(keyword.resolve(now))
}

/// Fully resolved query window for a bars request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub granularity: Granularity,
}

impl TimeWindow {
    /// Builds the window for an optional keyword.
    ///
    /// Without a keyword the window covers the last month at daily
    /// granularity. The end is always `now - 15 minutes`.
    pub fn resolve(since: Option<SinceKeyword>, now: DateTime<Utc>) -> Self {
        let (start, granularity) = match since {
            Some(keyword) => keyword.resolve(now),
            None => (months_before(now, DEFAULT_LOOKBACK_MONTHS), Granularity::Day),
        };
        Self {
            start,
            end: safe_end(now),
            granularity,
        }
    }
}

/// Latest bar end we ask the provider for.
pub fn safe_end(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::minutes(END_SAFETY_MARGIN_MINUTES)
}

fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
