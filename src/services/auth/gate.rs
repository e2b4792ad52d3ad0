use std::fmt;

use axum::http::HeaderValue;

use crate::services::auth::{
    AuthError,
    credentials::Credentials,
    principal::Principal,
    verifier::{CredentialVerifier, Verification},
};

/// Why a request was refused. Only ever reaches the logs; the wire response is identical
/// for every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    HeaderAbsent,
    UserNotFound { username: String },
    PasswordMismatch { username: String },
}

impl Denial {
    pub fn username(&self) -> Option<&str> {
        match self {
            Denial::HeaderAbsent => None,
            Denial::UserNotFound { username } | Denial::PasswordMismatch { username } => {
                Some(username.as_str())
            }
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::HeaderAbsent => f.write_str("auth header not found"),
            Denial::UserNotFound { .. } => f.write_str("user not found"),
            Denial::PasswordMismatch { .. } => f.write_str("password mismatch"),
        }
    }
}

#[derive(Debug)]
pub enum AuthOutcome {
    Granted(Principal),
    Denied(Denial),
}

#[derive(Clone)]
pub struct Authenticator {
    verifier: CredentialVerifier,
}

impl Authenticator {
    pub fn new(verifier: CredentialVerifier) -> Self {
        Self { verifier }
    }

    pub async fn authenticate(&self, header: Option<&HeaderValue>) -> Result<AuthOutcome, AuthError> {
        let Some(credentials) = Credentials::from_authorization(header) else {
            return Ok(AuthOutcome::Denied(Denial::HeaderAbsent));
        };

        let outcome = match self.verifier.verify(&credentials).await? {
            Verification::Authenticated(user) => AuthOutcome::Granted(Principal::from(&user)),
            Verification::UserNotFound => AuthOutcome::Denied(Denial::UserNotFound {
                username: credentials.username,
            }),
            Verification::PasswordMismatch => AuthOutcome::Denied(Denial::PasswordMismatch {
                username: credentials.username,
            }),
        };

        Ok(outcome)
    }
}
