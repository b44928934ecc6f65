// src/web/category_handlers.rs
use crate::{
    error::AppResult,
    models::category::{Category, CreateCategoryPayload},
    services::category_service,
    state::AppState,
    web::extract::ValidatedJson,
};
use axum::{extract::State, http::StatusCode, Json};

// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category_service::find_all_categories(&state.db_pool).await?;
    Ok(Json(categories))
}

// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryPayload>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = category_service::create_category(&state.db_pool, &payload.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
