/*!
 * Request extractors
 *
 * Public API:
 * - CurrentUser (Principal attached by the basic auth gate)
 * - CourseId (path id; unparsable ids are 404)
 * - JsonBody (JSON body; unreadable bodies are 400 with the validation shape)
 */

mod course_id;
mod current_user;
mod json_body;

pub use course_id::CourseId;
pub use current_user::CurrentUser;
pub use json_body::JsonBody;
