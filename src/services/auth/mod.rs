pub mod credentials;
pub mod factory;
pub mod gate;
pub mod ownership;
pub mod password;
pub mod principal;
pub mod verifier;

pub use factory::{build_authenticator, build_ownership, build_password_hasher};
pub use gate::{AuthOutcome, Authenticator};
pub use ownership::{Mutation, OwnershipAuthorizer};
pub use password::{Argon2Passwords, PasswordHashing};
pub use principal::Principal;

use crate::repos::RepoError;
use password::PasswordError;

/// Infrastructure failures while authenticating. Never a denial; maps to 500.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Store(#[from] RepoError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}
