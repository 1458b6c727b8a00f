#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gigboard_api::config::ServerConfig;
use gigboard_api::router::build_app_router;
use gigboard_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the application router behind the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body, already encoded.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid venue submission; tweak fields with `json[...] = ...` as needed.
pub fn venue_payload(name: &str, city: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "city": city,
        "state": state,
        "address": "1 Main St",
        "phone": "512-555-0100",
        "genres": ["Jazz", "Blues"],
        "image_link": "https://img.example.com/venue.jpg",
        "seeking_talent": true,
        "seeking_description": "Looking for local acts",
    })
}

/// A valid artist submission.
pub fn artist_payload(name: &str, city: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "city": city,
        "state": state,
        "phone": "415-555-0199",
        "genres": ["Rock n Roll"],
        "image_link": "https://img.example.com/artist.jpg",
        "seeking_venue": false,
    })
}

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &PgPool, payload: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/venues/create", payload).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &PgPool, payload: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/artists/create", payload).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Book a show through the API and return its id.
pub async fn create_show(
    pool: &PgPool,
    artist_id: i64,
    venue_id: i64,
    start_time: chrono::DateTime<chrono::Utc>,
) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/shows/create",
        serde_json::json!({
            "artist_id": artist_id,
            "venue_id": venue_id,
            "start_time": start_time,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
