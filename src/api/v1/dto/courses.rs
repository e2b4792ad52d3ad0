/*
 * Responsibility
 * - Courses の request/response DTO
 * - 所有者は JOIN 済みの user を "student" キーで返す (password / timestamps は含めない)
 */
use serde::{Deserialize, Deserializer, Serialize};

use crate::repos::course_repo::{CourseChanges, CourseOwner, CourseWithOwner, NewCourse};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl CreateCourseRequest {
    /// The owner is always the authenticated caller; any `userId` in the body is ignored.
    pub fn into_new_course(self, owner_id: i64) -> NewCourse {
        NewCourse {
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time,
            materials_needed: self.materials_needed,
            user_id: owner_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (set NULL)
    // - Some(Some(v)): set value
    #[serde(default, deserialize_with = "present")]
    pub estimated_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub materials_needed: Option<Option<String>>,
}

// only called when the key exists, so `null` becomes Some(None)
fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

impl From<UpdateCourseRequest> for CourseChanges {
    fn from(req: UpdateCourseRequest) -> Self {
        // title/description are NOT NULL: an explicit null is a blank value for validate()
        CourseChanges {
            title: req.title.map(Option::unwrap_or_default),
            description: req.description.map(Option::unwrap_or_default),
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<CourseOwner> for OwnerResponse {
    fn from(o: CourseOwner) -> Self {
        Self {
            id: o.id,
            first_name: o.first_name,
            last_name: o.last_name,
            email_address: o.email_address,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    #[serde(rename = "student")]
    pub owner: OwnerResponse,
}

impl From<CourseWithOwner> for CourseResponse {
    fn from(row: CourseWithOwner) -> Self {
        let c = row.course;
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            estimated_time: c.estimated_time,
            materials_needed: c.materials_needed,
            user_id: c.user_id,
            owner: row.owner.into(),
        }
    }
}
