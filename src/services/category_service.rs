// src/services/category_service.rs
use crate::{
    error::{is_unique_violation, AppError, AppResult},
    models::category::Category,
};
use sqlx::SqlitePool;

/// Lista todas as categorias, por ordem de criação.
pub async fn find_all_categories(db_pool: &SqlitePool) -> AppResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontradas {} categorias.", categories.len());
    Ok(categories)
}

/// Cria uma categoria. Nome repetido -> `AppError::Conflict` (UNIQUE na tabela).
pub async fn create_category(db_pool: &SqlitePool, name: &str) -> AppResult<Category> {
    let name = name.trim();
    tracing::info!("Tentando criar categoria: {}", name);

    let result = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES (?1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(db_pool)
    .await;

    match result {
        Ok(category) => {
            tracing::info!("✅ Categoria '{}' criada com id {}.", category.name, category.id);
            Ok(category)
        }
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Falha ao criar categoria: '{}' já existe.", name);
            Err(AppError::Conflict(format!("A categoria '{name}' já existe")))
        }
        Err(e) => Err(e.into()),
    }
}
