use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tickerbridge_market_data::{ErrorKind, MarketDataError};

/// Body returned for a since-keyword outside `day`/`week`/`month`/`year`.
pub const INVALID_SINCE_MESSAGE: &str = "Invalid since time";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MarketData(e) if e.kind() == ErrorKind::InvalidTimeWindow => {
                tracing::debug!("rejecting request: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    INVALID_SINCE_MESSAGE,
                )
                    .into_response();
            }
            ApiError::MarketData(e) => {
                tracing::error!("upstream market data request failed: {}", e);
            }
            ApiError::Internal(reason) => {
                tracing::error!("internal error: {}", reason);
            }
        }

        // Upstream details stay in the logs.
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: "Internal Server Error".to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
