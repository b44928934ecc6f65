// src/web/customer_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::customer::{Customer, CustomerFilter, CustomerPayload},
    services::customer_service,
    state::AppState,
    web::extract::{AppPath, AppQuery, ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

// GET /customers?cpf=
pub async fn list_customers(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<CustomerFilter>,
) -> AppResult<Json<Vec<Customer>>> {
    let prefix = filter.cpf.as_deref().filter(|cpf| !cpf.is_empty());
    let customers = customer_service::find_customers(&state.db_pool, prefix).await?;
    Ok(Json(customers))
}

// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Customer>> {
    customer_service::find_customer_by_id(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Cliente", id))
}

// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CustomerPayload>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = customer_service::create_customer(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

// PUT /customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    ValidatedJson(payload): ValidatedJson<CustomerPayload>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::update_customer(&state.db_pool, id, &payload).await?;
    Ok(Json(customer))
}
