//! Single-owner check for course mutations.
//!
//! Runs after the authentication gate. The owner is read from the stored course
//! (`userId`), never from the request path.

use std::sync::Arc;

use crate::repos::{
    course_repo::{CourseChanges, CourseRecord, CourseStore},
    error::RepoResult,
};
use crate::services::auth::principal::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    NotFound,
    Forbidden,
}

#[derive(Clone)]
pub struct OwnershipAuthorizer {
    courses: Arc<dyn CourseStore>,
}

enum Access {
    Owned(CourseRecord),
    Refused(Mutation),
}

impl OwnershipAuthorizer {
    pub fn new(courses: Arc<dyn CourseStore>) -> Self {
        Self { courses }
    }

    async fn check(&self, principal: &Principal, course_id: i64) -> RepoResult<Access> {
        let Some(course) = self.courses.find_by_id(course_id).await? else {
            return Ok(Access::Refused(Mutation::NotFound));
        };

        if course.user_id != principal.id {
            tracing::warn!(
                course_id,
                owner_id = course.user_id,
                principal_id = principal.id,
                "course mutation refused: not the owner"
            );
            return Ok(Access::Refused(Mutation::Forbidden));
        }

        Ok(Access::Owned(course))
    }

    pub async fn update(
        &self,
        principal: &Principal,
        course_id: i64,
        changes: CourseChanges,
    ) -> RepoResult<Mutation> {
        match self.check(principal, course_id).await? {
            Access::Owned(course) => {
                self.courses.update(course.id, changes).await?;
                Ok(Mutation::Applied)
            }
            Access::Refused(refused) => Ok(refused),
        }
    }

    pub async fn delete(&self, principal: &Principal, course_id: i64) -> RepoResult<Mutation> {
        match self.check(principal, course_id).await? {
            Access::Owned(course) => {
                self.courses.delete(course.id).await?;
                Ok(Mutation::Applied)
            }
            Access::Refused(refused) => Ok(refused),
        }
    }
}
