/*
 * Responsibility
 * - Path の String を course id (i64) として受ける
 * - 数値にならない id は「存在しない course」と同じ扱い (404, 空 body)
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub struct CourseId(pub i64);

impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        raw.parse().map(CourseId).map_err(|_| AppError::NotFound)
    }
}
