mod common;

use std::sync::Arc;

use axum::{
    body::to_bytes,
    http::{header, StatusCode},
};
use common::{app, app_with_config, get, test_config, StubProvider};
use tempfile::tempdir;

async fn body_text(response: axum::response::Response) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn root_redirects_to_docs_with_found() {
    let response = get(app(Arc::new(StubProvider::default())), "/").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/docs");
}

#[tokio::test]
async fn docs_serves_swagger_ui() {
    let response = get(app(Arc::new(StubProvider::default())), "/docs").await;
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/docs/");

    let response = get(app(Arc::new(StubProvider::default())), "/docs/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(body_text(response).await.contains("swagger-ui"));
}

#[tokio::test]
async fn docs_initializer_points_at_openapi_document() {
    let response = get(
        app(Arc::new(StubProvider::default())),
        "/docs/swagger-initializer.js",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/openapi.json"));
}

#[tokio::test]
async fn openapi_yaml_is_plain_text() {
    let response = get(app(Arc::new(StubProvider::default())), "/openapi.yaml").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let yaml = body_text(response).await;
    assert!(yaml.contains("openapi:"));
    assert!(yaml.contains("/stocks/{symbol}/{since}"));
    assert!(yaml.contains("/crypto/{symbol}"));
}

#[tokio::test]
async fn openapi_json_lists_all_market_routes() {
    let response = get(app(Arc::new(StubProvider::default())), "/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/stocks/{symbol}",
        "/stocks/{symbol}/{since}",
        "/stock/{symbol}",
        "/cryptos/{symbol}",
        "/cryptos/{symbol}/{since}",
        "/crypto/{symbol}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    let schemas = doc["components"]["schemas"].as_object().unwrap();
    assert!(schemas.contains_key("HistoricalStockResponse"));
    assert!(schemas.contains_key("LatestStockResponse"));
}

#[tokio::test]
async fn serves_plugin_manifest_from_disk() {
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("ai-plugin.json");
    std::fs::write(&manifest_path, r#"{"schema_version":"v1"}"#).unwrap();
    let config = test_config(manifest_path);

    let response = get(
        app_with_config(Arc::new(StubProvider::default()), &config),
        "/.well-known/ai-plugin.json",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(body_text(response).await, r#"{"schema_version":"v1"}"#);
}

#[tokio::test]
async fn missing_plugin_manifest_is_not_found() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path().join("absent.json"));

    let response = get(
        app_with_config(Arc::new(StubProvider::default()), &config),
        "/.well-known/ai-plugin.json",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
