/*
 * Responsibility
 * - 認証済みリクエストに付与される主体 (Principal) の型
 * - middleware が作って request extensions に格納し、handler は CurrentUser 経由で受け取る
 *
 * Notes
 * - StoredUser からの射影であり、password (hash) は持たない
 * - リクエスト毎に作り直す。永続化しない
 */
use serde::Serialize;

use crate::repos::user_repo::StoredUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<&StoredUser> for Principal {
    fn from(user: &StoredUser) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_address: user.email_address.clone(),
        }
    }
}
