/*
 * Responsibility
 * - データアクセス層 (UserStore / CourseStore) の公開インターフェース
 * - Postgres 実装は Pg*Repo、テスト用は memory
 */
pub mod course_repo;
pub mod error;
#[cfg(test)]
pub mod memory;
pub mod user_repo;

pub use course_repo::{CourseStore, PgCourseRepo};
pub use error::RepoError;
pub use user_repo::{PgUserRepo, UserStore};
