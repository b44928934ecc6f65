// src/models/game.rs
use super::validation::validate_name;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub stock_total: i64,
    pub category_id: i64,
    pub price_per_day: i64, // em centavos
}

/// Corpo de POST /games
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGamePayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(url(message = "image deve ser uma URL válida"))]
    pub image: String,
    #[validate(range(min = 1, message = "stockTotal deve ser maior que 0"))]
    pub stock_total: i64,
    #[validate(range(min = 1, message = "categoryId deve ser um id válido"))]
    pub category_id: i64,
    #[validate(range(min = 1, message = "pricePerDay deve ser maior que 0"))]
    pub price_per_day: i64,
}

/// Query string de GET /games (?name=prefixo)
#[derive(Debug, Default, Deserialize)]
pub struct GameFilter {
    pub name: Option<String>,
}
