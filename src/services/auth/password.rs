//! Adaptive password hashing (argon2id, PHC strings).
//!
//! Both operations are deliberately slow. Async callers go through [`hash_blocking`] /
//! [`verify_blocking`] so the work lands on tokio's blocking pool.

use std::sync::Arc;

use argon2::{Algorithm, Argon2, Params, Version};
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("invalid hashing parameters: {0}")]
    Params(argon2::Error),
    #[error("salt generation failed: {0}")]
    Salt(String),
    #[error("hashing failed: {0}")]
    Hash(password_hash::Error),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub trait PasswordHashing: Send + Sync + 'static {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;

    /// `false` on mismatch and on a digest that does not parse.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct Argon2Passwords {
    params: Params,
}

impl Argon2Passwords {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, PasswordError> {
        let params =
            Params::new(memory_kib, iterations, parallelism, None).map_err(PasswordError::Params)?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHashing for Argon2Passwords {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let mut salt_bytes = [0u8; 16];
        getrandom::getrandom(&mut salt_bytes).map_err(|e| PasswordError::Salt(e.to_string()))?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(PasswordError::Hash)?;

        let phc = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(PasswordError::Hash)?
            .to_string();
        Ok(phc)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        // params are read back from the PHC string, so older hashes keep verifying
        match PasswordHash::new(digest) {
            Ok(parsed) => self
                .argon2()
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

pub async fn hash_blocking(
    hasher: Arc<dyn PasswordHashing>,
    plaintext: String,
) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
}

pub async fn verify_blocking(
    hasher: Arc<dyn PasswordHashing>,
    plaintext: String,
    digest: String,
) -> Result<bool, PasswordError> {
    let ok = tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest)).await?;
    Ok(ok)
}

#[cfg(test)]
pub(crate) fn cheap() -> Argon2Passwords {
    Argon2Passwords::new(8, 1, 1).expect("valid test params")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_own_hash() {
        let hasher = cheap();
        for plaintext in ["secret", "", "pässwörd", "with:colon"] {
            let digest = hasher.hash(plaintext).unwrap();
            assert!(hasher.verify(plaintext, &digest), "{plaintext:?}");
        }
    }

    #[test]
    fn verify_rejects_other_plaintext() {
        let hasher = cheap();
        let digest = hasher.hash("wrong").unwrap();
        assert!(!hasher.verify("secret", &digest));
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = cheap();
        let a = hasher.hash("secret").unwrap();
        let b = hasher.hash("secret").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
        assert!(!a.contains("secret"));
    }

    #[test]
    fn garbage_digest_never_verifies() {
        let hasher = cheap();
        assert!(!hasher.verify("secret", "secret"));
        assert!(!hasher.verify("secret", ""));
    }

    #[test]
    fn rejects_invalid_params() {
        assert!(matches!(
            Argon2Passwords::new(0, 0, 0),
            Err(PasswordError::Params(_))
        ));
    }

    #[tokio::test]
    async fn blocking_helpers_round_trip() {
        let hasher: Arc<dyn PasswordHashing> = Arc::new(cheap());
        let digest = hash_blocking(hasher.clone(), "secret".into()).await.unwrap();
        assert!(verify_blocking(hasher.clone(), "secret".into(), digest.clone()).await.unwrap());
        assert!(!verify_blocking(hasher, "nope".into(), digest).await.unwrap());
    }
}
