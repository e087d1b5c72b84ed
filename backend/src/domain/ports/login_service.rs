//! Driving port for signin.
//!
//! Inbound adapters call this to check credentials without knowing how users
//! are stored or how passwords are hashed.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Return the matching user, or `None` when the email is unknown or the
    /// password is wrong. Both cases are indistinguishable to the caller.
    async fn validate_user(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error>;
}
