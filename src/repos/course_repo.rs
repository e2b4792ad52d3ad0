/*
 * Responsibility
 * - courses CRUD
 * - "userId" の FK (CASCADE) で所有者を表す。所有者チェック自体は services::auth::ownership の責務
 * - 一覧/詳細は所有者 (password 抜き) を JOIN して返す
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CourseRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[sqlx(rename = "estimatedTime")]
    pub estimated_time: Option<String>,
    #[sqlx(rename = "materialsNeeded")]
    pub materials_needed: Option<String>,
    #[sqlx(rename = "userId")]
    pub user_id: i64,
}

/// Owner columns joined onto a course. No password, no timestamps.
#[derive(Debug, Clone, FromRow)]
pub struct CourseOwner {
    #[sqlx(rename = "ownerId")]
    pub id: i64,
    #[sqlx(rename = "ownerFirstName")]
    pub first_name: String,
    #[sqlx(rename = "ownerLastName")]
    pub last_name: String,
    #[sqlx(rename = "ownerEmailAddress")]
    pub email_address: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct CourseWithOwner {
    #[sqlx(flatten)]
    pub course: CourseRecord,
    #[sqlx(flatten)]
    pub owner: CourseOwner,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
}

impl NewCourse {
    pub fn validate(&self) -> RepoResult<()> {
        let mut messages = Vec::new();
        if self.title.trim().is_empty() {
            messages.push("A title is required".to_string());
        }
        if self.description.trim().is_empty() {
            messages.push("A description is required".to_string());
        }
        RepoError::check(messages)
    }
}

/// Partial update.
///
/// - `None`: leave the column as is
/// - `Some(None)`: set NULL (nullable columns only)
/// - `Some(Some(v))`: set v
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
}

impl CourseChanges {
    pub fn validate(&self) -> RepoResult<()> {
        let mut messages = Vec::new();
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            messages.push("A title is required".to_string());
        }
        if let Some(description) = &self.description
            && description.trim().is_empty()
        {
            messages.push("A description is required".to_string());
        }
        RepoError::check(messages)
    }
}

#[async_trait]
pub trait CourseStore: Send + Sync + 'static {
    async fn list(&self) -> RepoResult<Vec<CourseWithOwner>>;

    async fn find_by_id(&self, course_id: i64) -> RepoResult<Option<CourseRecord>>;

    async fn find_with_owner(&self, course_id: i64) -> RepoResult<Option<CourseWithOwner>>;

    async fn create(&self, course: NewCourse) -> RepoResult<CourseRecord>;

    async fn update(&self, course_id: i64, changes: CourseChanges) -> RepoResult<()>;

    async fn delete(&self, course_id: i64) -> RepoResult<()>;
}

#[derive(Clone, Debug)]
pub struct PgCourseRepo {
    pool: PgPool,
}

impl PgCourseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_WITH_OWNER: &str = r#"
    SELECT
        c.id, c.title, c.description, c."estimatedTime", c."materialsNeeded", c."userId",
        u.id AS "ownerId",
        u."firstName" AS "ownerFirstName",
        u."lastName" AS "ownerLastName",
        u."emailAddress" AS "ownerEmailAddress"
    FROM courses c
    JOIN users u ON u.id = c."userId"
"#;

#[async_trait]
impl CourseStore for PgCourseRepo {
    async fn list(&self) -> RepoResult<Vec<CourseWithOwner>> {
        let rows = sqlx::query_as::<_, CourseWithOwner>(&format!(
            "{SELECT_WITH_OWNER} ORDER BY c.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, course_id: i64) -> RepoResult<Option<CourseRecord>> {
        let row = sqlx::query_as::<_, CourseRecord>(
            r#"
            SELECT
                id, title, description, "estimatedTime", "materialsNeeded", "userId"
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_with_owner(&self, course_id: i64) -> RepoResult<Option<CourseWithOwner>> {
        let row = sqlx::query_as::<_, CourseWithOwner>(&format!(
            "{SELECT_WITH_OWNER} WHERE c.id = $1"
        ))
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, course: NewCourse) -> RepoResult<CourseRecord> {
        course.validate()?;

        let row = sqlx::query_as::<_, CourseRecord>(
            r#"
            INSERT INTO courses (title, description, "estimatedTime", "materialsNeeded", "userId")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id, title, description, "estimatedTime", "materialsNeeded", "userId"
            "#,
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(course.estimated_time.as_deref())
        .bind(course.materials_needed.as_deref())
        .bind(course.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, course_id: i64, changes: CourseChanges) -> RepoResult<()> {
        changes.validate()?;

        // $4/$6: whether the nullable column was present in the request at all
        sqlx::query(
            r#"
            UPDATE courses
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                "estimatedTime" = CASE WHEN $4 THEN $5 ELSE "estimatedTime" END,
                "materialsNeeded" = CASE WHEN $6 THEN $7 ELSE "materialsNeeded" END,
                "updatedAt" = now()
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.estimated_time.is_some())
        .bind(changes.estimated_time.flatten())
        .bind(changes.materials_needed.is_some())
        .bind(changes.materials_needed.flatten())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, course_id: i64) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM courses
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_course_requires_title_and_description() {
        let course = NewCourse {
            title: "".into(),
            description: "   ".into(),
            estimated_time: None,
            materials_needed: None,
            user_id: 1,
        };

        match course.validate() {
            Err(RepoError::Validation { messages }) => assert_eq!(
                messages,
                vec!["A title is required", "A description is required"]
            ),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn changes_only_validate_present_fields() {
        assert!(CourseChanges::default().validate().is_ok());

        let changes = CourseChanges {
            description: Some(String::new()),
            ..Default::default()
        };
        match changes.validate() {
            Err(RepoError::Validation { messages }) => {
                assert_eq!(messages, vec!["A description is required"])
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
