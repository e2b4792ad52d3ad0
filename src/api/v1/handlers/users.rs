/*
 * Responsibility
 * - /users handler
 * - GET は gate 通過後の Principal をそのまま返す (DB は引き直さない)
 * - POST は validate → パスワードを blocking pool でハッシュ → repo
 */
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    api::v1::{
        dto::users::CreateUserRequest,
        extractors::{CurrentUser, JsonBody},
    },
    error::AppError,
    repos::user_repo::NewUser,
    services::auth::{AuthError, Principal, password::hash_blocking},
    state::AppState,
};

pub async fn current_user(CurrentUser(principal): CurrentUser) -> Json<Principal> {
    Json(principal)
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = NewUser::from(req);
    user.validate()?;

    let plaintext = std::mem::take(&mut user.password);
    user.password = hash_blocking(state.hasher.clone(), plaintext)
        .await
        .map_err(AuthError::from)?;

    let row = state.users.create(user).await?;
    tracing::info!(user_id = row.id, "user registered");

    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
