//! Driving port for account creation.

use async_trait::async_trait;

use crate::domain::{Error, SignupCredentials, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Create an account. A taken email yields an `ErrorCode::Conflict` error.
    async fn create_user(&self, credentials: &SignupCredentials) -> Result<User, Error>;
}
