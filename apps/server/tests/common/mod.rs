#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use chrono::{TimeZone, Utc};
use tickerbridge_market_data::{
    AlpacaConfig, Bar, BarSet, BarsRequest, LatestQuoteRequest, MarketDataError,
    MarketDataProvider, Quote,
};
use tickerbridge_server::{api::app_router, build_state_with_provider, config::Config};
use tower::ServiceExt;

/// Upstream stand-in that serves canned data and records every request.
#[derive(Default)]
pub struct StubProvider {
    pub bars: BarSet,
    pub quotes: HashMap<String, Quote>,
    pub fail: bool,
    pub bar_requests: Mutex<Vec<BarsRequest>>,
    pub quote_requests: Mutex<Vec<LatestQuoteRequest>>,
}

impl StubProvider {
    pub fn with_bars(symbol: &str, closes: &[f64]) -> Self {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, close)| Bar {
                timestamp: Utc
                    .with_ymd_and_hms(2024, 3, 11 + i as u32, 4, 0, 0)
                    .unwrap(),
                open: close - 1.0,
                high: close + 2.0,
                low: close - 2.0,
                close: *close,
                volume: 1000.0,
            })
            .collect();
        let mut bar_set = BarSet::new();
        bar_set.insert(symbol.to_string(), bars);
        Self {
            bars: bar_set,
            ..Self::default()
        }
    }

    pub fn with_quote(symbol: &str, ask_price: f64) -> Self {
        let mut quotes = HashMap::new();
        quotes.insert(
            symbol.to_string(),
            Quote {
                timestamp: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
                ask_price,
                ask_size: 1.0,
                bid_price: ask_price - 0.25,
                bid_size: 3.0,
            },
        );
        Self {
            quotes,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn bar_requests(&self) -> Vec<BarsRequest> {
        self.bar_requests.lock().unwrap().clone()
    }

    pub fn quote_requests(&self) -> Vec<LatestQuoteRequest> {
        self.quote_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_bars(&self, request: &BarsRequest) -> Result<BarSet, MarketDataError> {
        self.bar_requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(MarketDataError::Unauthorized {
                provider: "STUB".to_string(),
            });
        }
        Ok(self.bars.clone())
    }

    async fn get_latest_quotes(
        &self,
        request: &LatestQuoteRequest,
    ) -> Result<HashMap<String, Quote>, MarketDataError> {
        self.quote_requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(MarketDataError::ProviderError {
                provider: "STUB".to_string(),
                message: "HTTP 500: boom".to_string(),
            });
        }
        Ok(self.quotes.clone())
    }
}

pub fn test_config(plugin_manifest: PathBuf) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        plugin_manifest,
        log_format: "text".to_string(),
        alpaca: AlpacaConfig::new("test-key", "test-secret"),
    }
}

pub fn app(provider: Arc<StubProvider>) -> Router {
    app_with_config(provider, &test_config(PathBuf::from("missing-ai-plugin.json")))
}

pub fn app_with_config(provider: Arc<StubProvider>, config: &Config) -> Router {
    let state = build_state_with_provider(provider);
    app_router(state, config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}
