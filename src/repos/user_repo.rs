/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - UserStore trait を介して auth/handler に注入する (グローバルな DB ハンドルは持たない)
 * - 入力の検証は NewUser が持ち、フィールド単位のメッセージを RepoError::Validation で返す
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

pub const DUPLICATE_EMAIL: &str = "The email address you entered already exists";

/// A user row. `password` holds the PHC hash string, never plaintext.
#[derive(Clone, FromRow)]
pub struct StoredUser {
    pub id: i64,
    #[sqlx(rename = "firstName")]
    pub first_name: String,
    #[sqlx(rename = "lastName")]
    pub last_name: String,
    #[sqlx(rename = "emailAddress")]
    pub email_address: String,
    pub password: String,
}

impl std::fmt::Debug for StoredUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredUser")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    // plaintext while validating, replaced by the hash before `create`
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> RepoResult<()> {
        let mut messages = Vec::new();

        if self.first_name.trim().is_empty() {
            messages.push("A first name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            messages.push("A last name is required".to_string());
        }
        if self.email_address.trim().is_empty() {
            messages.push("An email address is required".to_string());
        } else if !looks_like_email(&self.email_address) {
            messages.push("Please provide a valid email address".to_string());
        }
        if self.password.is_empty() {
            messages.push("A password is required".to_string());
        }

        RepoError::check(messages)
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Exact match on `emailAddress`; case sensitivity follows the column collation.
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<StoredUser>>;

    async fn create(&self, user: NewUser) -> RepoResult<StoredUser>;
}

#[derive(Clone, Debug)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepo {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<StoredUser>> {
        let row = sqlx::query_as::<_, StoredUser>(
            r#"
            SELECT id, "firstName", "lastName", "emailAddress", password
            FROM users
            WHERE "emailAddress" = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, user: NewUser) -> RepoResult<StoredUser> {
        user.validate()?;

        let row = sqlx::query_as::<_, StoredUser>(
            r#"
            INSERT INTO users ("firstName", "lastName", "emailAddress", password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, "firstName", "lastName", "emailAddress", password
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email_address)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::from_sqlx(e, DUPLICATE_EMAIL))?;

        tracing::debug!(user_id = row.id, "user created");
        Ok(row)
    }
}
