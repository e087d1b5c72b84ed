//! Tests for the account HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{EmailAddress, UserId, UserName};
use crate::inbound::http::test_utils::{MockPorts, test_app};

const USER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn ada() -> User {
    User::new(
        UserId::new(USER).expect("fixture id"),
        EmailAddress::new("ada@example.com").expect("fixture email"),
        Some(UserName::new("Ada").expect("fixture name")),
    )
}

async fn post(ports: MockPorts, uri: &str, payload: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let req = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}

#[actix_web::test]
async fn signup_returns_201_without_credentials() {
    let mut ports = MockPorts::default();
    ports
        .signup
        .expect_create_user()
        .withf(|creds| {
            creds.email().as_ref() == "ada@example.com"
                && creds.password().expose() == "password1"
                && creds.name().map(AsRef::as_ref) == Some("Ada")
        })
        .times(1)
        .return_once(|_| Ok(ada()));

    let (status, body) = post(
        ports,
        "/users/signup",
        json!({"email": "ada@example.com", "password": "password1", "name": "Ada"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": USER, "email": "ada@example.com", "name": "Ada"})
    );
}

#[rstest]
#[case(json!({"password": "password1"}), "email", "missing_field")]
#[case(json!({"email": "ada@example.com"}), "password", "missing_field")]
#[case(json!({"email": "nope", "password": "password1"}), "email", "invalid_email")]
#[case(json!({"email": "ada@example.com", "password": "short"}), "password", "password_too_short")]
#[actix_web::test]
async fn signup_rejects_invalid_payloads(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let (status, body) = post(MockPorts::default(), "/users/signup", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[actix_web::test]
async fn signup_conflict_maps_to_409() {
    let mut ports = MockPorts::default();
    ports
        .signup
        .expect_create_user()
        .return_once(|_| Err(Error::conflict("email already registered")));

    let (status, body) = post(
        ports,
        "/users/signup",
        json!({"email": "ada@example.com", "password": "password1"}),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
}

#[actix_web::test]
async fn signin_returns_user_on_match() {
    let mut ports = MockPorts::default();
    ports
        .login
        .expect_validate_user()
        .withf(|creds| creds.email() == "ada@example.com")
        .times(1)
        .return_once(|_| Ok(Some(ada())));

    let (status, body) = post(
        ports,
        "/users/signin",
        json!({"email": "ada@example.com", "password": "password1"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], USER);
    assert!(body.get("passwordHash").is_none());
}

#[actix_web::test]
async fn signin_rejection_uses_fixed_message() {
    let mut ports = MockPorts::default();
    ports
        .login
        .expect_validate_user()
        .return_once(|_| Ok(None));

    let (status, body) = post(
        ports,
        "/users/signin",
        json!({"email": "ada@example.com", "password": "wrong"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "unauthorized");
    assert_eq!(body["message"], INVALID_CREDENTIALS_MESSAGE);
}

#[actix_web::test]
async fn signin_requires_a_password() {
    let (status, body) = post(
        MockPorts::default(),
        "/users/signin",
        json!({"email": "ada@example.com", "password": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "password");
    assert_eq!(body["details"]["code"], "empty_password");
}
