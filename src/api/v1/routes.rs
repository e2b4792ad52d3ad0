/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /users, /courses を merge
 * - Basic 認証が必要な範囲 (protected) にだけ gate を route_layer で適用する
 */
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::api::v1::handlers::{
    courses::{create_course, delete_course, get_course, list_courses, update_course},
    health::health,
    users::{create_user, current_user},
};
use crate::middleware::auth::basic;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health))
        .route("/users", post(create_user))
        .route("/courses", get(list_courses))
        .route("/courses/{id}", get(get_course));

    let protected = Router::new()
        .route("/users", get(current_user))
        .route("/courses", post(create_course))
        .route("/courses/{id}", put(update_course).delete(delete_course));

    public.merge(basic::apply(protected, state))
}
