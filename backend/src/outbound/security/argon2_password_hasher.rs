//! Argon2id implementation of the [`PasswordHasher`] port.
//!
//! Hashes are PHC strings carrying algorithm, parameters, and a random salt,
//! so verification needs nothing but the stored string. Both operations are
//! CPU-bound and run on Tokio's blocking pool.

use argon2::Argon2;
use argon2::password_hash::{
    self, PasswordHash as PhcHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    rand_core::OsRng,
};
use async_trait::async_trait;

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{Password, PasswordHash};

/// Argon2id hasher with the crate's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn hash_blocking(password: &Password) -> Result<PasswordHash, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| PasswordHash::new(hash.to_string()))
        .map_err(|err| PasswordHashError::hashing(err.to_string()))
}

fn verify_blocking(password: &Password, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
    let parsed = PhcHash::new(hash.as_str())
        .map_err(|err| PasswordHashError::malformed_hash(err.to_string()))?;
    match Argon2::default().verify_password(password.expose().as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(PasswordHashError::malformed_hash(err.to_string())),
    }
}

fn join_error(err: tokio::task::JoinError) -> PasswordHashError {
    PasswordHashError::hashing(format!("hashing task failed: {err}"))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        let password = password.clone();
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(join_error)?
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        let password = password.clone();
        let hash = hash.clone();
        tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
            .await
            .map_err(join_error)?
    }
}
