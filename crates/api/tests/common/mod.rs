#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pripals_api::config::ServerConfig;
use pripals_api::router::build_app_router;
use pripals_api::state::AppState;
use pripals_db::DbPool;
use serde_json::Value;
use tower::ServiceExt;

/// Multipart boundary used by [`post_multipart`].
const BOUNDARY: &str = "pripals-test-boundary";

/// A fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = pripals_db::create_pool("sqlite::memory:").await.unwrap();
    pripals_db::run_migrations(&pool).await.unwrap();
    pool
}

/// A fresh file-backed database in a temporary directory, with the same
/// multi-connection pool production uses. Keep the `TempDir` alive for as
/// long as the pool is in use.
pub async fn file_pool() -> (tempfile::TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("pripals.db").display());
    let pool = pripals_db::create_pool(&url).await.unwrap();
    pripals_db::run_migrations(&pool).await.unwrap();
    (dir, pool)
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:8080` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:8080".parse().unwrap()],
        ..ServerConfig::default()
    }
}

/// Build the full application router, with all middleware layers, over `pool`.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Same as [`build_test_app`] but with a caller-supplied configuration.
pub fn build_test_app_with(pool: DbPool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// Build the router over an existing `AppState`, so a test can reach shared
/// pieces such as the friend lock table while requests are in flight.
pub fn build_test_app_from_state(state: AppState) -> Router {
    let config = (*state.config).clone();
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(body.to_string()),
        Some("application/json".to_string()),
    )
    .await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::PUT,
        uri,
        Body::from(body.to_string()),
        Some("application/json".to_string()),
    )
    .await
}

/// POST a multipart body with a single file part named `field`.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    send(
        app,
        Method::POST,
        uri,
        Body::from(body),
        Some(format!("multipart/form-data; boundary={BOUNDARY}")),
    )
    .await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a friend through the API and return its `data` payload.
pub async fn create_friend(app: Router, name: &str) -> Value {
    let response = post_json(
        app,
        "/api/friends",
        serde_json::json!({
            "name": name,
            "profilePicture": format!("https://example.test/{name}.png"),
        }),
    )
    .await;
    body_json(response).await["data"].clone()
}

/// Record a point change through the API and return the raw response.
pub async fn award(app: Router, id: &str, points: i64, reason: &str) -> Response<Body> {
    post_json(
        app,
        &format!("/api/friends/{id}/points"),
        serde_json::json!({ "points": points, "reason": reason }),
    )
    .await
}
