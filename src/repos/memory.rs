//! In-process store used by unit and router tests.
//!
//! Applies the same input validation and unique-email rule as the Postgres repos.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::repos::{
    course_repo::{CourseChanges, CourseOwner, CourseRecord, CourseStore, CourseWithOwner, NewCourse},
    error::{RepoError, RepoResult},
    user_repo::{DUPLICATE_EMAIL, NewUser, StoredUser, UserStore},
};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<StoredUser>>,
    courses: Mutex<Vec<CourseRecord>>,
    lookups: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, id: i64, email: &str, password_hash: &str) -> Self {
        self.users.lock().unwrap().push(StoredUser {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email_address: email.to_string(),
            password: password_hash.to_string(),
        });
        self
    }

    pub fn with_course(self, id: i64, owner_id: i64) -> Self {
        self.courses.lock().unwrap().push(CourseRecord {
            id,
            title: format!("Course {id}"),
            description: "A course".to_string(),
            estimated_time: None,
            materials_needed: None,
            user_id: owner_id,
        });
        self
    }

    pub fn course(&self, id: i64) -> Option<CourseRecord> {
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn course_count(&self) -> usize {
        self.courses.lock().unwrap().len()
    }

    pub fn user(&self, email: &str) -> Option<StoredUser> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email_address == email)
            .cloned()
    }

    /// Number of `find_by_email` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn owner_of(&self, course: &CourseRecord) -> RepoResult<CourseOwner> {
        let users = self.users.lock().unwrap();
        let user = users
            .iter()
            .find(|u| u.id == course.user_id)
            .ok_or(RepoError::Db(sqlx::Error::RowNotFound))?;
        Ok(CourseOwner {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_address: user.email_address.clone(),
        })
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<StoredUser>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.user(email))
    }

    async fn create(&self, user: NewUser) -> RepoResult<StoredUser> {
        user.validate()?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email_address == user.email_address) {
            return Err(RepoError::Conflict {
                message: DUPLICATE_EMAIL.to_string(),
            });
        }
        let row = StoredUser {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
            password: user.password,
        };
        users.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<CourseWithOwner>> {
        let courses = self.courses.lock().unwrap().clone();
        courses
            .into_iter()
            .map(|course| {
                let owner = self.owner_of(&course)?;
                Ok(CourseWithOwner { course, owner })
            })
            .collect()
    }

    async fn find_by_id(&self, course_id: i64) -> RepoResult<Option<CourseRecord>> {
        Ok(self.course(course_id))
    }

    async fn find_with_owner(&self, course_id: i64) -> RepoResult<Option<CourseWithOwner>> {
        match self.course(course_id) {
            Some(course) => {
                let owner = self.owner_of(&course)?;
                Ok(Some(CourseWithOwner { course, owner }))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, course: NewCourse) -> RepoResult<CourseRecord> {
        course.validate()?;

        let mut courses = self.courses.lock().unwrap();
        let row = CourseRecord {
            id: courses.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
        };
        courses.push(row.clone());
        Ok(row)
    }

    async fn update(&self, course_id: i64, changes: CourseChanges) -> RepoResult<()> {
        changes.validate()?;

        let mut courses = self.courses.lock().unwrap();
        if let Some(course) = courses.iter_mut().find(|c| c.id == course_id) {
            if let Some(title) = changes.title {
                course.title = title;
            }
            if let Some(description) = changes.description {
                course.description = description;
            }
            if let Some(estimated_time) = changes.estimated_time {
                course.estimated_time = estimated_time;
            }
            if let Some(materials_needed) = changes.materials_needed {
                course.materials_needed = materials_needed;
            }
        }
        Ok(())
    }

    async fn delete(&self, course_id: i64) -> RepoResult<()> {
        self.courses.lock().unwrap().retain(|c| c.id != course_id);
        Ok(())
    }
}
