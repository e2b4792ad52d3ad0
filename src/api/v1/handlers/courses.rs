/*
 * Responsibility
 * - /courses 系 CRUD handler
 * - 読み取りは公開、作成/更新/削除は gate 済み (CurrentUser 必須)
 * - 更新/削除の所有者チェックは OwnershipAuthorizer に委譲する
 */
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    api::v1::{
        dto::courses::{CourseResponse, CreateCourseRequest, UpdateCourseRequest},
        extractors::{CourseId, CurrentUser, JsonBody},
    },
    error::AppError,
    services::auth::Mutation,
    state::AppState,
};

fn mutation_response(outcome: Mutation) -> Result<StatusCode, AppError> {
    match outcome {
        Mutation::Applied => Ok(StatusCode::NO_CONTENT),
        Mutation::NotFound => Err(AppError::NotFound),
        Mutation::Forbidden => Err(AppError::Forbidden),
    }
}

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let rows = state.courses.list().await?;
    Ok(Json(rows.into_iter().map(CourseResponse::from).collect()))
}

pub async fn get_course(
    State(state): State<AppState>,
    CourseId(course_id): CourseId,
) -> Result<Json<CourseResponse>, AppError> {
    let row = state
        .courses
        .find_with_owner(course_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create_course(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    JsonBody(req): JsonBody<CreateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let row = state
        .courses
        .create(req.into_new_course(principal.id))
        .await?;

    tracing::info!(course_id = row.id, user_id = principal.id, "course created");

    let location = format!("/api/v1/courses/{}", row.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

pub async fn update_course(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    CourseId(course_id): CourseId,
    JsonBody(req): JsonBody<UpdateCourseRequest>,
) -> Result<StatusCode, AppError> {
    let outcome = state
        .ownership
        .update(&principal, course_id, req.into())
        .await?;

    mutation_response(outcome)
}

pub async fn delete_course(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    CourseId(course_id): CourseId,
) -> Result<StatusCode, AppError> {
    let outcome = state.ownership.delete(&principal, course_id).await?;

    mutation_response(outcome)
}
