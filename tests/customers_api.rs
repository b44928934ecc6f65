//! Testes HTTP de /customers.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, customer_body, date, get, post_json, put_json, seed_customer, test_pool,
};
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_customer_by_id() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));

    let response = post_json(&app, "/customers", customer_body("João Alfredo", "01234567890")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(&app, &format!("/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "João Alfredo");
    assert_eq!(json["cpf"], "01234567890");
    assert_eq!(json["birthday"], "1992-10-05");
}

#[tokio::test]
async fn unknown_customer_returns_404() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));

    let response = get(&app, "/customers/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn duplicate_cpf_returns_409() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    seed_customer(&app, "Maria", "11122233344").await;

    let response = post_json(&app, "/customers", customer_body("Outra Maria", "11122233344")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_customer_returns_400_with_messages() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));

    let response = post_json(
        &app,
        "/customers",
        json!({ "name": "João", "phone": "123", "cpf": "abc", "birthday": "1992-10-05" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["messages"],
        json!(["cpf deve ter exatamente 11 dígitos", "phone deve ter 10 ou 11 dígitos"])
    );

    let response = post_json(
        &app,
        "/customers",
        json!({ "name": "João", "phone": "21998899222", "cpf": "01234567890", "birthday": "não é data" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cpf_filter_matches_prefix_only() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    seed_customer(&app, "Ana", "12345678901").await;
    seed_customer(&app, "Bruno", "12399999999").await;
    seed_customer(&app, "Carla", "99912345678").await;

    let list = body_json(get(&app, "/customers?cpf=123").await).await;
    let cpfs: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["cpf"].as_str().unwrap())
        .collect();
    assert_eq!(cpfs, vec!["12345678901", "12399999999"]);

    let list = body_json(get(&app, "/customers").await).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_customer_keeps_own_cpf_and_rejects_foreign_cpf() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    let ana = seed_customer(&app, "Ana", "12345678901").await;
    seed_customer(&app, "Bruno", "98765432100").await;

    // Mesmo cpf, nome novo: permitido
    let response = put_json(&app, &format!("/customers/{ana}"), customer_body("Ana Paula", "12345678901")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Ana Paula");

    // cpf do Bruno: conflito
    let response = put_json(&app, &format!("/customers/{ana}"), customer_body("Ana Paula", "98765432100")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(get(&app, &format!("/customers/{ana}")).await).await;
    assert_eq!(json["cpf"], "12345678901");
}

#[tokio::test]
async fn update_unknown_customer_returns_404() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));

    let response = put_json(&app, "/customers/77", customer_body("Ninguém", "55555555555")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
