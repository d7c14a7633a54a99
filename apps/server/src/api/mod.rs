use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeFile,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{HistoricalStockResponse, LatestStockResponse},
};

pub mod cryptos;
pub mod stocks;

const PLUGIN_MANIFEST_PATH: &str = "/.well-known/ai-plugin.json";
const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tickerbridge",
        description = "Historical bars and latest quotes for stocks and crypto."
    ),
    paths(
        stocks::historical_stock,
        stocks::historical_stock_since,
        stocks::latest_stock,
        cryptos::historical_crypto,
        cryptos::historical_crypto_since,
        cryptos::latest_crypto,
    ),
    components(schemas(HistoricalStockResponse, LatestStockResponse)),
    tags((name = "stocks"), (name = "cryptos"))
)]
pub struct ApiDoc;

async fn redirect_to_docs() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, DOCS_PATH)])
}

async fn openapi_yaml() -> ApiResult<Response> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI YAML: {}", e)))?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        yaml,
    )
        .into_response())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    cors.allow_methods(Any).allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .merge(stocks::router())
        .merge(cryptos::router())
        .merge(SwaggerUi::new(DOCS_PATH).url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(redirect_to_docs))
        .route("/openapi.yaml", get(openapi_yaml))
        .route_service(PLUGIN_MANIFEST_PATH, ServeFile::new(&config.plugin_manifest))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
