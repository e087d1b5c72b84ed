//! Journal HTTP handlers.
//!
//! ```text
//! POST /journals {"title":"Day 1","content":"Hello","userId":"..."}
//! GET /journals?userId=...
//! GET /journals/{id}?userId=...
//! DELETE /journals/{id}?userId=...
//! ```
//!
//! Every route is scoped by the `userId` the caller supplies. An entry owned
//! by someone else behaves exactly like one that does not exist.

use actix_web::{HttpResponse, delete, get, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Journal;
use crate::domain::ports::{CreateJournalRequest, DeleteJournalRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_journal_id, parse_user_id,
};

const TITLE: FieldName = FieldName::new("title");
const CONTENT: FieldName = FieldName::new("content");
const USER_ID: FieldName = FieldName::new("userId");
const ID: FieldName = FieldName::new("id");

/// Request payload for creating a journal entry.
///
/// Fields are optional at the serde level so a missing field yields a
/// `missing_field` detail rather than a generic body error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJournalRequestBody {
    #[schema(example = "Day 1")]
    pub title: Option<String>,
    #[schema(example = "Hello")]
    pub content: Option<String>,
    #[schema(format = "uuid")]
    pub user_id: Option<String>,
}

impl TryFrom<CreateJournalRequestBody> for CreateJournalRequest {
    type Error = crate::domain::Error;

    fn try_from(value: CreateJournalRequestBody) -> Result<Self, Self::Error> {
        let CreateJournalRequestBody {
            title,
            content,
            user_id,
        } = value;
        let title = title.ok_or_else(|| missing_field_error(TITLE))?;
        let content = content.ok_or_else(|| missing_field_error(CONTENT))?;
        let user_id = parse_user_id(user_id, USER_ID)?;
        Ok(Self {
            title,
            content,
            user_id,
        })
    }
}

/// `?userId=` query shared by the read and delete routes.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// Owner whose entries are addressed.
    #[param(value_type = String)]
    pub user_id: Option<String>,
}

/// Journal entry as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[schema(format = "uuid")]
    pub user_id: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<Journal> for JournalBody {
    fn from(value: Journal) -> Self {
        Self {
            id: value.id().to_string(),
            title: value.title().as_ref().to_owned(),
            content: value.content().as_ref().to_owned(),
            user_id: value.user_id().to_string(),
            created_at: value
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: value
                .updated_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Result of a scoped delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteJournalResponseBody {
    /// Number of removed entries: `1` when the entry existed for this owner,
    /// otherwise `0`.
    pub count: u64,
}

/// Create a journal entry for `userId`.
#[utoipa::path(
    post,
    path = "/journals",
    request_body = CreateJournalRequestBody,
    responses(
        (status = 201, description = "Journal created", body = JournalBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["journals"],
    operation_id = "createJournal"
)]
#[post("/journals")]
pub async fn create_journal(
    state: web::Data<HttpState>,
    payload: web::Json<CreateJournalRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = CreateJournalRequest::try_from(payload.into_inner())?;
    let journal = state.journals.create_journal(request).await?;
    Ok(HttpResponse::Created().json(JournalBody::from(journal)))
}

/// List the caller's journal entries, newest first.
#[utoipa::path(
    get,
    path = "/journals",
    params(UserIdQuery),
    responses(
        (status = 200, description = "Journals, newest first", body = [JournalBody]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["journals"],
    operation_id = "listJournals"
)]
#[get("/journals")]
pub async fn list_journals(
    state: web::Data<HttpState>,
    query: web::Query<UserIdQuery>,
) -> ApiResult<web::Json<Vec<JournalBody>>> {
    let user_id = parse_user_id(query.into_inner().user_id, USER_ID)?;
    let journals = state.journals_query.list_journals(&user_id).await?;
    Ok(web::Json(
        journals.into_iter().map(JournalBody::from).collect(),
    ))
}

/// Fetch one entry. Answers `null` when it is absent or owned by someone else.
#[utoipa::path(
    get,
    path = "/journals/{id}",
    params(
        ("id" = String, Path, description = "Journal identifier (UUID)"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Journal, or null when not visible", body = Option<JournalBody>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["journals"],
    operation_id = "getJournal"
)]
#[get("/journals/{id}")]
pub async fn get_journal(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<UserIdQuery>,
) -> ApiResult<web::Json<Option<JournalBody>>> {
    let id = parse_journal_id(&path.into_inner(), ID)?;
    let user_id = parse_user_id(query.into_inner().user_id, USER_ID)?;
    let journal = state.journals_query.get_journal(&id, &user_id).await?;
    Ok(web::Json(journal.map(JournalBody::from)))
}

/// Delete one entry owned by `userId`. Repeating the call is harmless.
#[utoipa::path(
    delete,
    path = "/journals/{id}",
    params(
        ("id" = String, Path, description = "Journal identifier (UUID)"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Number of deleted entries", body = DeleteJournalResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["journals"],
    operation_id = "deleteJournal"
)]
#[delete("/journals/{id}")]
pub async fn delete_journal(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<UserIdQuery>,
) -> ApiResult<web::Json<DeleteJournalResponseBody>> {
    let id = parse_journal_id(&path.into_inner(), ID)?;
    let user_id = parse_user_id(query.into_inner().user_id, USER_ID)?;
    let response = state
        .journals
        .delete_journal(DeleteJournalRequest { id, user_id })
        .await?;
    Ok(web::Json(DeleteJournalResponseBody {
        count: response.deleted_count,
    }))
}

#[cfg(test)]
#[path = "journals_tests.rs"]
mod tests;
