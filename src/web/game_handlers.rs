// src/web/game_handlers.rs
use crate::{
    error::AppResult,
    models::game::{CreateGamePayload, Game, GameFilter},
    services::game_service,
    state::AppState,
    web::extract::{AppQuery, ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

// GET /games?name=
pub async fn list_games(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<GameFilter>,
) -> AppResult<Json<Vec<Game>>> {
    // "?name=" vazio equivale a não filtrar
    let prefix = filter.name.as_deref().filter(|name| !name.is_empty());
    let games = game_service::find_games(&state.db_pool, prefix).await?;
    Ok(Json(games))
}

// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGamePayload>,
) -> AppResult<(StatusCode, Json<Game>)> {
    let game = game_service::create_game(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}
