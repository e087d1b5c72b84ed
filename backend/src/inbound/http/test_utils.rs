//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{
    MockJournalCommand, MockJournalQuery, MockLoginService, MockSignupService,
};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Mocked driving ports. Unset mocks panic if a handler reaches them.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub journals: MockJournalCommand,
    pub journals_query: MockJournalQuery,
    pub signup: MockSignupService,
    pub login: MockLoginService,
}

impl MockPorts {
    pub(crate) fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.journals),
            Arc::new(self.journals_query),
            Arc::new(self.signup),
            Arc::new(self.login),
        )
    }
}

/// Application with every route registered against `ports`.
pub(crate) fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .wrap(Trace)
        .configure(configure)
}
