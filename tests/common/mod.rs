//! Shared helpers for the HTTP tests. Each test gets its own in-memory
//! SQLite database and drives the router with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use cinema::{AppState, config::Config, db, models::NewMovie, routes};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

pub async fn test_app(enable_movie_routes: bool) -> TestApp {
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        enable_movie_routes,
    };
    let db = db::connect_and_migrate(&config.database_url, config.database_max_connections)
        .await
        .expect("failed to open in-memory database");
    let state = Arc::new(AppState { config: Arc::new(config), db: db.clone() });
    TestApp { router: routes::router(state), db }
}

/// Sends a request and returns (status, raw body bytes).
pub async fn send(
    app: &TestApp,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Sends a raw JSON body, for payloads `serde_json::Value` cannot express.
pub async fn send_raw(app: &TestApp, method: &str, path: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(json!(null)))
}

/// Sends a request and returns (status, json). Empty bodies decode as `null`.
pub async fn send_json(
    app: &TestApp,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, path, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

pub async fn seed_movie(app: &TestApp, title: &str) -> i32 {
    let movie = cinema::services::movies::create_movie(
        &app.db,
        NewMovie { title: title.to_string(), description: None, duration_minutes: None },
    )
    .await
    .unwrap();
    movie.id
}

pub fn movie_not_found() -> Value {
    json!({ "message": "Filme não encontrado!" })
}

pub fn session_not_found() -> Value {
    json!({ "message": "Sessão não encontrada!" })
}
