//! Экстракторы параметров запроса: query, form-тело, id кафе в пути.
//!
//! Повторяющиеся ключи не отклоняются: берётся первое значение.

use crate::error::AppError;
use crate::services::cafe_service::CAFE_ID_NOT_FOUND;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Form;
use std::convert::Infallible;

/// Пары ключ/значение в порядке следования.
#[derive(Debug, Default, Clone)]
pub struct RequestParams(Vec<(String, String)>);

impl RequestParams {
    /// Первое значение ключа.
    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

/// Экстрактор строки запроса.
pub struct QueryParams(pub RequestParams);

/// Экстрактор form-encoded тела. Нечитаемое тело равно пустой форме.
pub struct FormParams(pub RequestParams);

/// Экстрактор id кафе из пути: только десятичные цифры.
pub struct CafeId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for QueryParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(e) => {
                tracing::debug!("Строка запроса не разобрана: {e}");
                Vec::new()
            }
        };
        Ok(QueryParams(RequestParams(pairs)))
    }
}

impl<S: Send + Sync> FromRequest<S> for FormParams {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => pairs,
            Err(e) => {
                tracing::debug!("Тело формы не разобрано: {e}");
                Vec::new()
            }
        };
        Ok(FormParams(RequestParams(pairs)))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CafeId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;
        parse_cafe_id(&raw).map(CafeId)
    }
}

/// Некорректный id неотличим от отсутствующего.
pub fn parse_cafe_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse().map_err(|_| not_found())
}

fn not_found() -> AppError {
    AppError::NotFound(CAFE_ID_NOT_FOUND.into())
}
