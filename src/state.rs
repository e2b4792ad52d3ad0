/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: users/courses store, password hasher, Authenticator, OwnershipAuthorizer
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - すべて構築時に注入する。モジュールレベルのシングルトンは持たない
 */
use std::sync::Arc;

use crate::repos::{CourseStore, UserStore};
use crate::services::auth::{
    Authenticator, OwnershipAuthorizer, PasswordHashing, build_authenticator, build_ownership,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub courses: Arc<dyn CourseStore>,
    pub hasher: Arc<dyn PasswordHashing>,
    pub auth: Arc<Authenticator>,
    pub ownership: Arc<OwnershipAuthorizer>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        courses: Arc<dyn CourseStore>,
        hasher: Arc<dyn PasswordHashing>,
    ) -> Self {
        let auth = build_authenticator(users.clone(), hasher.clone());
        let ownership = build_ownership(courses.clone());

        Self {
            users,
            courses,
            hasher,
            auth,
            ownership,
        }
    }
}
