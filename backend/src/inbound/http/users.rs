//! Account HTTP handlers.
//!
//! ```text
//! POST /users/signup {"email":"ada@example.com","password":"password1","name":"Ada"}
//! POST /users/signin {"email":"ada@example.com","password":"password1"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, SignupCredentials, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, map_credentials_error, missing_field_error};

/// Message returned for every rejected signin, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "メールアドレスまたはパスワードが正しくありません";

const EMAIL: FieldName = FieldName::new("email");
const PASSWORD: FieldName = FieldName::new("password");

/// Signup request body for `POST /users/signup`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequestBody {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "password1")]
    pub password: Option<String>,
    #[schema(example = "Ada")]
    pub name: Option<String>,
}

impl TryFrom<SignupRequestBody> for SignupCredentials {
    type Error = Error;

    fn try_from(value: SignupRequestBody) -> Result<Self, Self::Error> {
        let email = value.email.ok_or_else(|| missing_field_error(EMAIL))?;
        let password = value.password.ok_or_else(|| missing_field_error(PASSWORD))?;
        Self::try_from_parts(&email, &password, value.name.as_deref())
            .map_err(map_credentials_error)
    }
}

/// Signin request body for `POST /users/signin`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequestBody {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "password1")]
    pub password: Option<String>,
}

impl TryFrom<SigninRequestBody> for LoginCredentials {
    type Error = Error;

    fn try_from(value: SigninRequestBody) -> Result<Self, Self::Error> {
        let email = value.email.ok_or_else(|| missing_field_error(EMAIL))?;
        let password = value.password.ok_or_else(|| missing_field_error(PASSWORD))?;
        Self::try_from_parts(&email, &password).map_err(map_credentials_error)
    }
}

/// Public view of an account. Never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl From<User> for UserBody {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            email: value.email().to_string(),
            name: value.name().map(|name| name.as_ref().to_owned()),
        }
    }
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/users/signup",
    request_body = SignupRequestBody,
    responses(
        (status = 201, description = "Account created", body = UserBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "signup"
)]
#[post("/users/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequestBody>,
) -> ApiResult<HttpResponse> {
    let credentials = SignupCredentials::try_from(payload.into_inner())?;
    let user = state.signup.create_user(&credentials).await?;
    info!(user_id = %user.id(), "account created");
    Ok(HttpResponse::Created().json(UserBody::from(user)))
}

/// Check credentials and return the matching account.
///
/// Unknown emails and wrong passwords produce the same 401 body.
#[utoipa::path(
    post,
    path = "/users/signin",
    request_body = SigninRequestBody,
    responses(
        (status = 200, description = "Credentials accepted", body = UserBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "signin"
)]
#[post("/users/signin")]
pub async fn signin(
    state: web::Data<HttpState>,
    payload: web::Json<SigninRequestBody>,
) -> ApiResult<web::Json<UserBody>> {
    let credentials = LoginCredentials::try_from(payload.into_inner())?;
    match state.login.validate_user(&credentials).await? {
        Some(user) => Ok(web::Json(UserBody::from(user))),
        None => Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE)),
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
