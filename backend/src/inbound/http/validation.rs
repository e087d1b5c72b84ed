//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper produces an `invalid_request` error whose `details` carry the
//! offending `field` and a machine-readable `code`.

use serde_json::json;

use crate::domain::{
    CredentialsValidationError, Error, JournalId, UserId, UserValidationError,
};

/// Field-level validation codes reported in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorCode {
    MissingField,
    InvalidUuid,
    InvalidBody,
    InvalidQuery,
}

impl FieldErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidBody => "invalid_body",
            Self::InvalidQuery => "invalid_query",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        format!("missing required field: {}", field.as_str()),
        FieldErrorCode::MissingField.as_str(),
    )
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    Error::invalid_request(format!("{} must be a valid UUID", field.as_str())).with_details(
        json!({
            "field": field.as_str(),
            "value": value,
            "code": FieldErrorCode::InvalidUuid.as_str(),
        }),
    )
}

/// Error for a JSON body Actix could not deserialise.
pub(crate) fn invalid_body_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("invalid request body: {reason}"))
        .with_details(json!({ "code": FieldErrorCode::InvalidBody.as_str() }))
}

/// Error for a query string Actix could not deserialise.
pub(crate) fn invalid_query_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("invalid query string: {reason}"))
        .with_details(json!({ "code": FieldErrorCode::InvalidQuery.as_str() }))
}

/// Require a present, non-blank value.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(raw),
        _ => Err(missing_field_error(field)),
    }
}

pub(crate) fn parse_user_id(value: Option<String>, field: FieldName) -> Result<UserId, Error> {
    let raw = require(value, field)?;
    UserId::new(raw.trim()).map_err(|_| invalid_uuid_error(field, &raw))
}

pub(crate) fn parse_journal_id(value: &str, field: FieldName) -> Result<JournalId, Error> {
    JournalId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Map credential validation failures onto field-level errors.
pub(crate) fn map_credentials_error(err: CredentialsValidationError) -> Error {
    let (field, code) = match &err {
        CredentialsValidationError::EmptyEmail => ("email", "empty_email"),
        CredentialsValidationError::EmptyPassword => ("password", "empty_password"),
        CredentialsValidationError::PasswordTooShort { .. } => ("password", "password_too_short"),
        CredentialsValidationError::PasswordTooLong { .. } => ("password", "password_too_long"),
        CredentialsValidationError::User(user) => match user {
            UserValidationError::EmptyEmail => ("email", "empty_email"),
            UserValidationError::InvalidEmail => ("email", "invalid_email"),
            UserValidationError::EmailTooLong { .. } => ("email", "email_too_long"),
            UserValidationError::EmptyName => ("name", "empty_name"),
            UserValidationError::NameTooLong { .. } => ("name", "name_too_long"),
            UserValidationError::EmptyId | UserValidationError::InvalidId => ("id", "invalid_id"),
        },
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}
