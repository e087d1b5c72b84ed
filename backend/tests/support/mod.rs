//! Shared harness for HTTP integration tests.
//!
//! Builds the full route table over the in-memory adapters with a clock that
//! advances one second per reading, so creation order is deterministic.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::{JournalService, UserCredentialService};
use backend::inbound::http::configure;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryStore;
use backend::outbound::security::Argon2PasswordHasher;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;

/// Clock that ticks forward one second every time it is read.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            base: Utc
                .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
                .single()
                .expect("valid base timestamp"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + chrono::Duration::seconds(tick)
    }
}

/// Handler state over a fresh in-memory store.
pub fn in_memory_state() -> HttpState {
    let store = InMemoryStore::new();
    let journals = Arc::new(JournalService::new(
        Arc::new(store.journals()),
        Arc::new(SteppingClock::new()),
    ));
    let credentials = Arc::new(UserCredentialService::new(
        Arc::new(store.users()),
        Arc::new(Argon2PasswordHasher::new()),
    ));
    HttpState::new(journals.clone(), journals, credentials.clone(), credentials)
}

/// Initialise the application service over a fresh store.
pub async fn init_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(in_memory_state()))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

/// Send `req` and decode the JSON body.
pub async fn call_json<S>(app: &S, req: test::TestRequest) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status().as_u16();
    let body = test::read_body(res).await;
    let value = serde_json::from_slice(&body).expect("JSON response body");
    (status, value)
}

/// Register an account and return its identifier.
pub async fn signup<S>(app: &S, email: &str, password: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, body) = call_json(
        app,
        test::TestRequest::post()
            .uri("/users/signup")
            .set_json(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, 201, "signup failed: {body}");
    body["id"].as_str().expect("user id").to_owned()
}
