// src/services/game_service.rs
use crate::{
    db,
    error::{is_unique_violation, AppError, AppResult},
    models::game::{CreateGamePayload, Game},
    services::like_prefix,
};
use sqlx::SqlitePool;

const GAME_COLUMNS: &str = "id, name, image, stock_total, category_id, price_per_day";

/// Forma usada na busca: minúsculas Unicode (`Á` -> `á`).
pub(crate) fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Lista os jogos; com `name_prefix`, só os que começam por ele, sem
/// distinção de maiúsculas (compara com a coluna `name_folded`).
pub async fn find_games(db_pool: &SqlitePool, name_prefix: Option<&str>) -> AppResult<Vec<Game>> {
    tracing::debug!("Buscando jogos (prefixo: {:?})", name_prefix);
    let pattern = name_prefix.map(|prefix| like_prefix(&fold_name(prefix)));

    let games = sqlx::query_as::<_, Game>(&format!(
        r#"
        SELECT {GAME_COLUMNS}
        FROM games
        WHERE (?1 IS NULL OR name_folded LIKE ?1 ESCAPE '\')
        ORDER BY id ASC
        "#
    ))
    .bind(pattern)
    .fetch_all(db_pool)
    .await?;

    tracing::debug!("Encontrados {} jogos.", games.len());
    Ok(games)
}

/// Cria um jogo. Categoria inexistente -> 400; nome repetido -> 409.
pub async fn create_game(db_pool: &SqlitePool, payload: &CreateGamePayload) -> AppResult<Game> {
    let name = payload.name.trim();
    tracing::info!("Tentando criar jogo: {}", name);

    let mut tx = db::begin_write(db_pool).await?;

    // 1. A categoria tem de existir
    let category_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)")
            .bind(payload.category_id)
            .fetch_one(&mut *tx)
            .await?;
    if !category_exists {
        tracing::warn!("Falha ao criar jogo: categoria {} não existe.", payload.category_id);
        return Err(AppError::BadRequest(format!(
            "A categoria com id {} não existe",
            payload.category_id
        )));
    }

    // 2. Insere (o UNIQUE em games.name trata dos duplicados)
    let result = sqlx::query_as::<_, Game>(&format!(
        r#"
        INSERT INTO games (name, image, stock_total, category_id, price_per_day, name_folded)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING {GAME_COLUMNS}
        "#
    ))
    .bind(name)
    .bind(payload.image.trim())
    .bind(payload.stock_total)
    .bind(payload.category_id)
    .bind(payload.price_per_day)
    .bind(fold_name(name))
    .fetch_one(&mut *tx)
    .await;

    let game = match result {
        Ok(game) => game,
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Falha ao criar jogo: '{}' já existe.", name);
            return Err(AppError::Conflict(format!("O jogo '{name}' já existe")));
        }
        Err(e) => return Err(e.into()),
    };

    tx.commit().await?;
    tracing::info!("✅ Jogo '{}' criado com id {}.", game.name, game.id);
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::fold_name;

    #[test]
    fn fold_name_lowercases_accented_capitals() {
        assert_eq!(fold_name("Ábaco Mágico"), "ábaco mágico");
        assert_eq!(fold_name("ÇÃO"), "ção");
        assert_eq!(fold_name("war"), "war");
    }
}
