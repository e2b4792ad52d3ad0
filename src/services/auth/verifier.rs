//! Email lookup + password check.

use std::sync::Arc;

use crate::repos::user_repo::{StoredUser, UserStore};
use crate::services::auth::{
    AuthError,
    credentials::Credentials,
    password::{PasswordHashing, verify_blocking},
};

#[derive(Debug)]
pub enum Verification {
    UserNotFound,
    PasswordMismatch,
    Authenticated(StoredUser),
}

#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHashing>,
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHashing>) -> Self {
        Self { users, hasher }
    }

    pub async fn verify(&self, credentials: &Credentials) -> Result<Verification, AuthError> {
        let Some(user) = self.users.find_by_email(&credentials.username).await? else {
            return Ok(Verification::UserNotFound);
        };

        let matches = verify_blocking(
            self.hasher.clone(),
            credentials.password.clone(),
            user.password.clone(),
        )
        .await?;

        if matches {
            Ok(Verification::Authenticated(user))
        } else {
            Ok(Verification::PasswordMismatch)
        }
    }
}
