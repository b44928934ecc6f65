// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Códigos de erro estendidos do SQLite
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de configuração: {0}")]
    ConfigError(String),

    // Corpo JSON inválido ou regras do `validator` falharam
    #[error("Dados inválidos: {}", .0.join("; "))]
    Validation(Vec<String>),

    // Referência inexistente ou regra de negócio violada
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        AppError::NotFound(format!("{entity} com id {id} não encontrado"))
    }
}

/// Indica se o erro é uma violação de UNIQUE (ex.: cpf ou nome repetido).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    sqlite_code(err).is_some_and(|c| c == SQLITE_CONSTRAINT_UNIQUE || c == SQLITE_CONSTRAINT_PRIMARYKEY)
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    sqlite_code(err).is_some_and(|c| c == SQLITE_CONSTRAINT_FOREIGNKEY)
}

fn sqlite_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

// Como converter AppError numa resposta HTTP (JSON)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(messages) => {
                tracing::debug!("Validação falhou: {:?}", messages);
                let body = json!({
                    "code": "VALIDATION_ERROR",
                    "error": "Dados inválidos.",
                    "messages": messages,
                });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::SqlxError(e) if is_unique_violation(e) => {
                tracing::warn!("Violação de unicidade: {}", e);
                (StatusCode::CONFLICT, "CONFLICT", "Registo duplicado.".to_string())
            }
            AppError::SqlxError(e) if is_foreign_key_violation(e) => {
                tracing::warn!("Violação de chave estrangeira: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "BAD_REQUEST",
                    "Referência a um registo inexistente.".to_string(),
                )
            }
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                // Loga o erro detalhado no servidor, o cliente recebe mensagem genérica
                tracing::error!("Erro processado: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Erro ao aceder aos dados.".to_string(),
                )
            }
            AppError::ConfigError(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Erro de configuração.".to_string(),
                )
            }
        };

        (status, Json(json!({ "code": code, "error": message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
