/// Factory: build the auth services from application `Config` and the injected stores.
use std::sync::Arc;

use crate::config::Config;
use crate::repos::{CourseStore, UserStore};
use crate::services::auth::{
    Argon2Passwords, Authenticator, OwnershipAuthorizer, PasswordHashing,
    password::PasswordError, verifier::CredentialVerifier,
};

pub fn build_password_hasher(config: &Config) -> Result<Arc<dyn PasswordHashing>, PasswordError> {
    let hasher = Argon2Passwords::new(
        config.password_hash_memory_kib,
        config.password_hash_iterations,
        config.password_hash_parallelism,
    )?;

    Ok(Arc::new(hasher))
}

pub fn build_authenticator(
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHashing>,
) -> Arc<Authenticator> {
    Arc::new(Authenticator::new(CredentialVerifier::new(users, hasher)))
}

pub fn build_ownership(courses: Arc<dyn CourseStore>) -> Arc<OwnershipAuthorizer> {
    Arc::new(OwnershipAuthorizer::new(courses))
}
