//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the error schema
//! wrappers from [`crate::inbound::http::schemas`], which keep domain types
//! free of `utoipa`. Swagger UI serves it in debug builds and the
//! `openapi-dump` binary prints it for external tooling.

use crate::inbound::http::journals::{
    CreateJournalRequestBody, DeleteJournalResponseBody, JournalBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{SigninRequestBody, SignupRequestBody, UserBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Journaly backend API",
        description = "Journal entries scoped by user, account signup and signin, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::journals::create_journal,
        crate::inbound::http::journals::list_journals,
        crate::inbound::http::journals::get_journal,
        crate::inbound::http::journals::delete_journal,
        crate::inbound::http::users::signup,
        crate::inbound::http::users::signin,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateJournalRequestBody,
        JournalBody,
        DeleteJournalResponseBody,
        SignupRequestBody,
        SigninRequestBody,
        UserBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "journals", description = "Journal entries owned by a user"),
        (name = "users", description = "Account signup and signin"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
