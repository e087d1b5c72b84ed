//! Journal entries and their value objects.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Validation errors raised while building journal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalValidationError {
    InvalidId,
    EmptyTitle,
    EmptyContent,
}

impl fmt::Display for JournalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "journal id must be a valid UUID"),
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyContent => write!(f, "content must not be empty"),
        }
    }
}

impl std::error::Error for JournalValidationError {}

/// Journal identifier backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JournalId(Uuid);

impl JournalId {
    pub fn new(id: impl AsRef<str>) -> Result<Self, JournalValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| JournalValidationError::InvalidId)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for JournalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<JournalId> for String {
    fn from(value: JournalId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for JournalId {
    type Error = JournalValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! non_blank_text {
    ($(#[$meta:meta])* $name:ident, $empty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Keep `raw` verbatim. Rejects input that is empty or whitespace only.
            pub fn new(raw: impl Into<String>) -> Result<Self, JournalValidationError> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(JournalValidationError::$empty);
                }
                Ok(Self(raw))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = JournalValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_blank_text!(
    /// Journal headline.
    JournalTitle,
    EmptyTitle
);
non_blank_text!(
    /// Journal body text, stored exactly as written.
    JournalContent,
    EmptyContent
);

/// Validated input for a new journal, before an id and timestamps exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDraft {
    pub title: JournalTitle,
    pub content: JournalContent,
    pub user_id: UserId,
}

impl JournalDraft {
    /// Validate raw title and content for `user_id`.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{JournalDraft, UserId};
    ///
    /// let draft = JournalDraft::try_from_parts(" Day 1 ", "Hello", UserId::random()).unwrap();
    /// assert_eq!(draft.title.as_ref(), " Day 1 ");
    /// ```
    pub fn try_from_parts(
        title: &str,
        content: &str,
        user_id: UserId,
    ) -> Result<Self, JournalValidationError> {
        Ok(Self {
            title: JournalTitle::new(title)?,
            content: JournalContent::new(content)?,
            user_id,
        })
    }
}

/// A persisted journal entry owned by exactly one user.
///
/// ## Invariants
/// - `user_id` never changes after creation.
/// - `updated_at` is not earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    id: JournalId,
    title: JournalTitle,
    content: JournalContent,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Journal {
    /// Materialise a draft with its identifier and creation time.
    pub fn from_draft(id: JournalId, draft: JournalDraft, now: DateTime<Utc>) -> Self {
        let JournalDraft {
            title,
            content,
            user_id,
        } = draft;
        Self {
            id,
            title,
            content,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a journal from stored columns.
    pub fn restore(
        id: JournalId,
        title: JournalTitle,
        content: JournalContent,
        user_id: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            user_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &JournalId {
        &self.id
    }

    pub fn title(&self) -> &JournalTitle {
        &self.title
    }

    pub fn content(&self) -> &JournalContent {
        &self.content
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether `user_id` owns this entry.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("", "body", JournalValidationError::EmptyTitle)]
    #[case(" \t ", "body", JournalValidationError::EmptyTitle)]
    #[case("title", "", JournalValidationError::EmptyContent)]
    #[case("title", "\n\n", JournalValidationError::EmptyContent)]
    fn draft_rejects_blank_fields(
        #[case] title: &str,
        #[case] content: &str,
        #[case] expected: JournalValidationError,
    ) {
        let err = JournalDraft::try_from_parts(title, content, UserId::random())
            .expect_err("blank input must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn text_is_stored_verbatim() {
        let title = JournalTitle::new("  Day 1 ").expect("valid title");
        let content = JournalContent::new("    indented\nline\n").expect("valid content");
        assert_eq!(title.as_ref(), "  Day 1 ");
        assert_eq!(content.as_ref(), "    indented\nline\n");
    }

    #[rstest]
    fn journal_id_rejects_garbage() {
        assert_eq!(JournalId::new("42"), Err(JournalValidationError::InvalidId));
    }

    #[rstest]
    fn serialises_with_camel_case_fields() {
        let user_id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("uuid");
        let id = JournalId::new("7c9e6679-7425-40de-944b-e07fc1f90ae7").expect("uuid");
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single().expect("timestamp");
        let draft = JournalDraft::try_from_parts("Day 1", "Hello", user_id).expect("draft");
        let journal = Journal::from_draft(id, draft, now);

        let value = serde_json::to_value(&journal).expect("serialise journal");
        assert_eq!(
            value,
            json!({
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "title": "Day 1",
                "content": "Hello",
                "userId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "createdAt": "2024-05-01T09:30:00Z",
                "updatedAt": "2024-05-01T09:30:00Z",
            })
        );
        assert!(journal.is_owned_by(&user_id));
        assert!(!journal.is_owned_by(&UserId::random()));
    }
}
