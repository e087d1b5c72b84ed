//! Account creation and credential checks.
//!
//! [`UserCredentialService`] implements [`SignupService`] and [`LoginService`]
//! over a [`UserRepository`] and a [`PasswordHasher`].
//!
//! Signin against an unknown email still runs one password verification, using
//! a decoy hash derived once per service instance, so that the unknown-email
//! and wrong-password paths do comparable work.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::OnceCell;

use crate::domain::ports::{
    LoginService, PasswordHashError, PasswordHasher, SignupService, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    Error, LoginCredentials, PasswordHash, SignupCredentials, User, UserAccount, UserId,
};

const DECOY_PASSWORD: &str = "decoy-password-never-assigned";

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => email_taken(),
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

fn email_taken() -> Error {
    Error::conflict("email is already registered")
        .with_details(json!({ "field": "email", "code": "email_taken" }))
}

/// Credential service backed by a user repository and password hasher.
pub struct UserCredentialService<R, H> {
    user_repo: Arc<R>,
    hasher: Arc<H>,
    decoy_hash: OnceCell<PasswordHash>,
}

impl<R, H> UserCredentialService<R, H> {
    pub fn new(user_repo: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            user_repo,
            hasher,
            decoy_hash: OnceCell::new(),
        }
    }
}

impl<R, H> UserCredentialService<R, H>
where
    H: PasswordHasher,
{
    async fn decoy_hash(&self) -> Result<&PasswordHash, Error> {
        self.decoy_hash
            .get_or_try_init(|| async {
                let decoy = LoginCredentials::try_from_parts("decoy@invalid", DECOY_PASSWORD)
                    .map_err(|err| Error::internal(format!("invalid decoy credentials: {err}")))?;
                self.hasher
                    .hash(decoy.password())
                    .await
                    .map_err(map_hash_error)
            })
            .await
    }
}

#[async_trait]
impl<R, H> SignupService for UserCredentialService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn create_user(&self, credentials: &SignupCredentials) -> Result<User, Error> {
        let existing = self
            .user_repo
            .find_by_email(credentials.email().as_ref())
            .await
            .map_err(map_persistence_error)?;
        if existing.is_some() {
            return Err(email_taken());
        }

        let password_hash = self
            .hasher
            .hash(credentials.password())
            .await
            .map_err(map_hash_error)?;
        let user = User::new(
            UserId::random(),
            credentials.email().clone(),
            credentials.name().cloned(),
        );
        let account = UserAccount::new(user, password_hash);

        self.user_repo
            .insert(&account)
            .await
            .map_err(map_persistence_error)?;
        Ok(account.into_user())
    }
}

#[async_trait]
impl<R, H> LoginService for UserCredentialService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn validate_user(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error> {
        let account = self
            .user_repo
            .find_by_email(credentials.email())
            .await
            .map_err(map_persistence_error)?;

        let Some(account) = account else {
            let decoy = self.decoy_hash().await?;
            self.hasher
                .verify(credentials.password(), decoy)
                .await
                .map_err(map_hash_error)?;
            return Ok(None);
        };

        let matches = self
            .hasher
            .verify(credentials.password(), account.password_hash())
            .await
            .map_err(map_hash_error)?;
        Ok(matches.then(|| account.into_user()))
    }
}

#[cfg(test)]
#[path = "user_credential_service_tests.rs"]
mod tests;
