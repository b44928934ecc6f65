#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use locadora::db;
use locadora::state::{AppState, FixedClock};
use locadora::web::routes::create_app;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Base de dados em memória nova, já migrada.
pub async fn test_pool() -> SqlitePool {
    db::create_in_memory_pool().await.unwrap()
}

/// Router completo (mesmo middleware do `main`) com o relógio parado em `today`.
pub fn build_test_app(pool: SqlitePool, today: NaiveDate) -> Router {
    create_app(AppState::new(pool, Arc::new(FixedClock(today))))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str) -> Response {
    send(app, Method::PUT, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Dados de teste (passam pela API, com a mesma validação)
// ---------------------------------------------------------------------------

pub async fn seed_category(app: &Router, name: &str) -> i64 {
    let response = post_json(app, "/categories", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn seed_game(app: &Router, name: &str, category_id: i64, stock_total: i64, price_per_day: i64) -> i64 {
    let response = post_json(
        app,
        "/games",
        json!({
            "name": name,
            "image": "http://example.com/game.jpg",
            "stockTotal": stock_total,
            "categoryId": category_id,
            "pricePerDay": price_per_day,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

pub fn customer_body(name: &str, cpf: &str) -> Value {
    json!({
        "name": name,
        "phone": "21998899222",
        "cpf": cpf,
        "birthday": "1992-10-05",
    })
}

pub async fn seed_customer(app: &Router, name: &str, cpf: &str) -> i64 {
    let response = post_json(app, "/customers", customer_body(name, cpf)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn seed_rental(app: &Router, customer_id: i64, game_id: i64, days_rented: i64) -> Response {
    post_json(
        app,
        "/rentals",
        json!({ "customerId": customer_id, "gameId": game_id, "daysRented": days_rented }),
    )
    .await
}
