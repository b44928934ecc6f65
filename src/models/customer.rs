// src/models/customer.rs
use super::validation::{validate_cpf, validate_name, validate_phone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub cpf: String,
    pub birthday: NaiveDate, // YYYY-MM-DD
}

/// Corpo de POST /customers e PUT /customers/{id}
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerPayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,
    pub birthday: NaiveDate,
}

/// Query string de GET /customers (?cpf=prefixo)
#[derive(Debug, Default, Deserialize)]
pub struct CustomerFilter {
    pub cpf: Option<String>,
}
