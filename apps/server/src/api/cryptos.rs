use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{HistoricalStockResponse, LatestStockResponse},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tickerbridge_market_data::AssetClass;

// Symbols are quoted against USD; `btc` is requested and returned as `BTC/USD`.

#[utoipa::path(
    get,
    path = "/cryptos/{symbol}",
    tag = "cryptos",
    params(("symbol" = String, Path, description = "Coin ticker, e.g. btc")),
    responses(
        (status = 200, description = "Daily bars for the last month", body = [HistoricalStockResponse]),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn historical_crypto(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HistoricalStockResponse>>> {
    let bars = state
        .quote_service
        .get_historical_bars(AssetClass::Crypto, &symbol, None)
        .await?;
    Ok(Json(bars.into_iter().map(HistoricalStockResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/cryptos/{symbol}/{since}",
    tag = "cryptos",
    params(
        ("symbol" = String, Path, description = "Coin ticker, e.g. btc"),
        ("since" = String, Path, description = "One of day, week, month, year")
    ),
    responses(
        (status = 200, description = "Bars for the requested window", body = [HistoricalStockResponse]),
        (status = 400, description = "Invalid since time", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn historical_crypto_since(
    Path((symbol, since)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HistoricalStockResponse>>> {
    let bars = state
        .quote_service
        .get_historical_bars(AssetClass::Crypto, &symbol, Some(&since))
        .await?;
    Ok(Json(bars.into_iter().map(HistoricalStockResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/crypto/{symbol}",
    tag = "cryptos",
    params(("symbol" = String, Path, description = "Coin ticker, e.g. eth")),
    responses(
        (status = 200, description = "Latest ask price", body = LatestStockResponse),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn latest_crypto(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LatestStockResponse>> {
    let quote = state
        .quote_service
        .get_latest_quote(AssetClass::Crypto, &symbol)
        .await?;
    Ok(Json(LatestStockResponse::from(quote)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cryptos/{symbol}", get(historical_crypto))
        .route("/cryptos/{symbol}/{since}", get(historical_crypto_since))
        .route("/crypto/{symbol}", get(latest_crypto))
}
