/*
 * Responsibility
 * - Users の request DTO
 * - 欠けたフィールドは空文字として受け、repo 側の validate() にメッセージを任せる
 * - response は Principal (password 無し) をそのまま返す
 */
use serde::Deserialize;

use crate::repos::user_repo::NewUser;

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email_address: req.email_address.trim().to_string(),
            password: req.password,
        }
    }
}
