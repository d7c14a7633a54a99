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

#[utoipa::path(
    get,
    path = "/stocks/{symbol}",
    tag = "stocks",
    params(("symbol" = String, Path, description = "Ticker, e.g. AAPL")),
    responses(
        (status = 200, description = "Daily bars for the last month", body = [HistoricalStockResponse]),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn historical_stock(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HistoricalStockResponse>>> {
    let bars = state
        .quote_service
        .get_historical_bars(AssetClass::Equity, &symbol, None)
        .await?;
    Ok(Json(bars.into_iter().map(HistoricalStockResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/stocks/{symbol}/{since}",
    tag = "stocks",
    params(
        ("symbol" = String, Path, description = "Ticker, e.g. AAPL"),
        ("since" = String, Path, description = "One of day, week, month, year")
    ),
    responses(
        (status = 200, description = "Bars for the requested window", body = [HistoricalStockResponse]),
        (status = 400, description = "Invalid since time", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn historical_stock_since(
    Path((symbol, since)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HistoricalStockResponse>>> {
    let bars = state
        .quote_service
        .get_historical_bars(AssetClass::Equity, &symbol, Some(&since))
        .await?;
    Ok(Json(bars.into_iter().map(HistoricalStockResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/stock/{symbol}",
    tag = "stocks",
    params(("symbol" = String, Path, description = "Ticker, e.g. AAPL")),
    responses(
        (status = 200, description = "Latest ask price", body = LatestStockResponse),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn latest_stock(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LatestStockResponse>> {
    let quote = state
        .quote_service
        .get_latest_quote(AssetClass::Equity, &symbol)
        .await?;
    Ok(Json(LatestStockResponse::from(quote)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks/{symbol}", get(historical_stock))
        .route("/stocks/{symbol}/{since}", get(historical_stock_since))
        .route("/stock/{symbol}", get(latest_stock))
}
