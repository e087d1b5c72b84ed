//! Domain primitives, services, and ports.
//!
//! Purpose: hold the journaling rules independent of transport and storage.
//! Value objects validate on construction; services implement the driving
//! ports in [`ports`] and depend only on the driven ports declared there.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Journal`, `JournalDraft`, `JournalId`: journal entries.
//! - `User`, `UserAccount`, `UserId`, `EmailAddress`: accounts.
//! - `LoginCredentials`, `SignupCredentials`, `Password`, `PasswordHash`.
//! - `JournalService`, `UserCredentialService`: driving port implementations.

pub mod auth;
pub mod error;
pub mod journal;
mod journal_service;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_credential_service;

pub use self::auth::{
    CredentialsValidationError, LoginCredentials, PASSWORD_MIN, Password, PasswordHash,
    SignupCredentials,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::journal::{
    Journal, JournalContent, JournalDraft, JournalId, JournalTitle, JournalValidationError,
};
pub use self::journal_service::JournalService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, User, UserAccount, UserId, UserName, UserValidationError};
pub use self::user_credential_service::UserCredentialService;
