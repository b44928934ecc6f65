// src/models/category.rs
use super::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Corpo de POST /categories
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}
