//! Credential primitives for signup and signin.
//!
//! Handlers build these from raw payload strings; services only ever see the
//! validated forms. Plaintext passwords sit in [`Zeroizing`] buffers so they
//! are wiped when dropped.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{EmailAddress, UserName, UserValidationError};

/// Minimum password length accepted at signup, in characters.
pub const PASSWORD_MIN: usize = 8;
/// Upper bound on password length so hashing cost stays bounded.
pub const PASSWORD_MAX: usize = 1024;

/// Validation errors for credential payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    EmptyEmail,
    EmptyPassword,
    PasswordTooShort { min: usize },
    PasswordTooLong { max: usize },
    User(UserValidationError),
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::PasswordTooLong { max } => {
                write!(f, "password must be at most {max} characters")
            }
            Self::User(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UserValidationError> for CredentialsValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::User(value)
    }
}

/// Plaintext password held only for the duration of a request.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    fn checked(raw: &str, min: usize) -> Result<Self, CredentialsValidationError> {
        if raw.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        let length = raw.chars().count();
        if length < min {
            return Err(CredentialsValidationError::PasswordTooShort { min });
        }
        if length > PASSWORD_MAX {
            return Err(CredentialsValidationError::PasswordTooLong { max: PASSWORD_MAX });
        }
        Ok(Self(Zeroizing::new(raw.to_owned())))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// PHC-formatted password hash (algorithm, parameters, salt, digest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a stored PHC string. Parsing happens in the hasher adapter.
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

/// Validated signin payload.
///
/// ## Invariants
/// - `email` is trimmed and non-empty. Its shape is not checked: a malformed
///   address simply fails to match any account.
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada@example.com ", "hunter22").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Password,
}

impl LoginCredentials {
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        Ok(Self {
            email: email.to_owned(),
            password: Password::checked(password, 1)?,
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Validated signup payload.
///
/// A blank `name` is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    email: EmailAddress,
    password: Password,
    name: Option<UserName>,
}

impl SignupCredentials {
    pub fn try_from_parts(
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<Self, CredentialsValidationError> {
        if email.trim().is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        let email = EmailAddress::new(email)?;
        let password = Password::checked(password, PASSWORD_MIN)?;
        let name = match name.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(UserName::new(raw)?),
        };
        Ok(Self {
            email,
            password,
            name,
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("ada@example.com", "", CredentialsValidationError::EmptyPassword)]
    fn login_rejects_missing_parts(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password).expect_err("invalid login");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn login_accepts_short_passwords_and_keeps_whitespace() {
        let creds = LoginCredentials::try_from_parts("ada@example.com", " x ").expect("valid");
        assert_eq!(creds.password().expose(), " x ");
    }

    #[rstest]
    #[case("", "longenough", CredentialsValidationError::EmptyEmail)]
    #[case("nope", "longenough", CredentialsValidationError::User(UserValidationError::InvalidEmail))]
    #[case("ada@example.com", "", CredentialsValidationError::EmptyPassword)]
    #[case("ada@example.com", "short", CredentialsValidationError::PasswordTooShort { min: PASSWORD_MIN })]
    fn signup_rejects_bad_parts(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = SignupCredentials::try_from_parts(email, password, None)
            .expect_err("invalid signup");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("   "), None)]
    #[case(Some(" Ada "), Some("Ada"))]
    fn signup_normalises_name(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let creds = SignupCredentials::try_from_parts("ada@example.com", "password1", raw)
            .expect("valid signup");
        assert_eq!(creds.name().map(AsRef::as_ref), expected);
    }

    #[rstest]
    fn password_debug_is_redacted() {
        let creds = LoginCredentials::try_from_parts("ada@example.com", "secret").expect("valid");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("secret"));
    }
}
