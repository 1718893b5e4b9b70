//! Типы ошибок сервиса кафе.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

/// Текст ответа клиенту при внутренней ошибке; детали только в логе.
pub const INTERNAL_ERROR_MESSAGE: &str = "Sorry, something went wrong on our side.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Не найдено: {0}")]
    NotFound(String),

    #[error("Нет прав: {0}")]
    PermissionDenied(String),

    #[error("Нарушение ограничения: {0}")]
    ConstraintViolation(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl AppError {
    /// Ключ внутри объекта `error` в теле ответа.
    fn category(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not Found",
            AppError::PermissionDenied(_) => "Permissions Error",
            AppError::ConstraintViolation(_) => "Constraint Violation",
            AppError::Internal(_) => "Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            AppError::PermissionDenied(m) => (StatusCode::FORBIDDEN, m.clone()),
            AppError::ConstraintViolation(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
            AppError::Internal(_) => {
                tracing::error!("{self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        let body = json!({ "error": { (self.category()): message } });
        (status, axum::Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(m)) = e.sql_err() {
            return AppError::ConstraintViolation(m);
        }
        match e {
            DbErr::RecordNotFound(m) => AppError::NotFound(m),
            other => AppError::Internal(other.to_string()),
        }
    }
}
