// src/web/extract.rs
use crate::{error::AppError, models::validation::error_messages};
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// `Json<T>` que também corre as regras `Validate` de `T`.
/// Qualquer falha (corpo mal formado, campo em falta, regra violada) vira
/// `AppError::Validation` -> 400 com a lista de mensagens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(error_messages(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// `Query<T>` cuja rejeição sai no formato JSON de `AppError` (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;
        Ok(AppQuery(value))
    }
}

/// `Path<T>` cuja rejeição (ex.: `/rentals/abc`) sai como `AppError` (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;
        Ok(AppPath(value))
    }
}
