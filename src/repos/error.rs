/*
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - Validation / Conflict / Db をタグ付きで返し、HTTP 層で網羅的に match させる
 */
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("validation failed: {}", .messages.join(", "))]
    Validation { messages: Vec<String> },
    #[error("conflict: {message}")]
    Conflict { message: String },
    #[error("db error")]
    Db(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
    /// Unique violations carry `message` so callers can report which constraint tripped.
    pub fn from_sqlx(e: sqlx::Error, message: &str) -> Self {
        if let sqlx::Error::Database(dbe) = &e
            && dbe.code().as_deref() == Some(UNIQUE_VIOLATION)
        {
            return RepoError::Conflict {
                message: message.to_string(),
            };
        }
        RepoError::Db(e)
    }

    pub(crate) fn check(messages: Vec<String>) -> RepoResult<()> {
        if messages.is_empty() {
            Ok(())
        } else {
            Err(RepoError::Validation { messages })
        }
    }
}
