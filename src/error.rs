/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - RepoError / AuthError を統一的に変換 (未知のエラーは必ず 500 に落とす)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::auth::AuthError;

pub const ACCESS_DENIED: &str = "Access Denied";

#[derive(Debug, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // same body for every denial reason
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": ACCESS_DENIED })),
            )
                .into_response(),
            AppError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrors { errors }),
            )
                .into_response(),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "internal server error" })),
            )
                .into_response(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Validation { messages } => AppError::Validation(messages),
            RepoError::Conflict { message } => AppError::Validation(vec![message]),
            RepoError::Db(err) => {
                tracing::error!(error = ?err, "database failure");
                AppError::Internal
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        tracing::error!(error = ?e, "authentication backend failure");
        AppError::Internal
    }
}
