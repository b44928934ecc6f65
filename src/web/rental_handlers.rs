// src/web/rental_handlers.rs
use crate::{
    error::AppResult,
    models::rental::{CreateRentalPayload, Rental, RentalDetails, RentalFilter},
    services::rental_service,
    state::AppState,
    web::extract::{AppPath, AppQuery, ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

// GET /rentals?customerId=&gameId=
pub async fn list_rentals(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<RentalFilter>,
) -> AppResult<Json<Vec<RentalDetails>>> {
    let rentals = rental_service::find_rentals(&state.db_pool, &filter).await?;
    Ok(Json(rentals))
}

// POST /rentals
pub async fn create_rental(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRentalPayload>,
) -> AppResult<(StatusCode, Json<Rental>)> {
    let today = state.clock.today();
    let rental = rental_service::create_rental(&state.db_pool, &payload, today).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

// PUT /rentals/{id}/return
pub async fn return_rental(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Rental>> {
    let today = state.clock.today();
    let rental = rental_service::return_rental(&state.db_pool, id, today).await?;
    Ok(Json(rental))
}

// DELETE /rentals/{id}
pub async fn delete_rental(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Value>> {
    rental_service::delete_rental(&state.db_pool, id).await?;
    Ok(Json(json!({ "deleted": id })))
}
