//! Testes HTTP de /games.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, date, get, post_json, seed_category, seed_game, test_pool};
use serde_json::json;

fn game_body(name: &str, category_id: i64) -> serde_json::Value {
    json!({
        "name": name,
        "image": "http://example.com/banco.jpg",
        "stockTotal": 3,
        "categoryId": category_id,
        "pricePerDay": 1500,
    })
}

#[tokio::test]
async fn create_game_returns_201_with_camel_case_body() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    let category_id = seed_category(&app, "Tabuleiro").await;

    let response = post_json(&app, "/games", game_body("Banco Imobiliário", category_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let game = body_json(response).await;
    assert_eq!(game["name"], "Banco Imobiliário");
    assert_eq!(game["stockTotal"], 3);
    assert_eq!(game["categoryId"], category_id);
    assert_eq!(game["pricePerDay"], 1500);
}

#[tokio::test]
async fn unknown_category_returns_400() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));

    let response = post_json(&app, "/games", game_body("Detetive", 42)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn duplicate_game_name_returns_409() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    let category_id = seed_category(&app, "Tabuleiro").await;
    seed_game(&app, "War", category_id, 1, 100).await;

    let response = post_json(&app, "/games", game_body("War", category_id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_payload_lists_every_problem() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    let category_id = seed_category(&app, "Tabuleiro").await;

    let response = post_json(
        &app,
        "/games",
        json!({
            "name": "War",
            "image": "sem-url",
            "stockTotal": 0,
            "categoryId": category_id,
            "pricePerDay": 0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["messages"],
        json!([
            "image deve ser uma URL válida",
            "pricePerDay deve ser maior que 0",
            "stockTotal deve ser maior que 0",
        ])
    );
}

#[tokio::test]
async fn name_filter_is_a_case_insensitive_prefix() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    let category_id = seed_category(&app, "Tabuleiro").await;
    seed_game(&app, "Banco Imobiliário", category_id, 1, 100).await;
    seed_game(&app, "Batalha Naval", category_id, 1, 100).await;
    seed_game(&app, "Xadrez", category_id, 1, 100).await;

    let list = body_json(get(&app, "/games?name=ba").await).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Banco Imobiliário", "Batalha Naval"]);

    let list = body_json(get(&app, "/games?name=Ban").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // '%' é literal, não wildcard
    let list = body_json(get(&app, "/games?name=%25").await).await;
    assert!(list.as_array().unwrap().is_empty());

    let list = body_json(get(&app, "/games").await).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn name_filter_ignores_case_of_accented_letters() {
    let app = build_test_app(test_pool().await, date(2024, 3, 1));
    let category_id = seed_category(&app, "Tabuleiro").await;
    seed_game(&app, "Ábaco Mágico", category_id, 1, 100).await;
    seed_game(&app, "Xadrez", category_id, 1, 100).await;

    // ábaco
    let list = body_json(get(&app, "/games?name=%C3%A1baco").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Ábaco Mágico");

    // ÁBACO
    let list = body_json(get(&app, "/games?name=%C3%81BACO").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}
