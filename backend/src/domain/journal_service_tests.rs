//! Tests for the journal service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockJournalRepository;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn service(repo: MockJournalRepository) -> JournalService<MockJournalRepository> {
    JournalService::new(
        Arc::new(repo),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    )
}

#[fixture]
fn owner() -> UserId {
    UserId::random()
}

fn create_request(title: &str, content: &str, user_id: UserId) -> CreateJournalRequest {
    CreateJournalRequest {
        title: title.to_owned(),
        content: content.to_owned(),
        user_id,
    }
}

fn stored_journal(user_id: UserId) -> Journal {
    let draft = JournalDraft::try_from_parts("Day 1", "Hello", user_id).expect("valid draft");
    Journal::from_draft(JournalId::random(), draft, fixture_timestamp())
}

#[rstest]
#[tokio::test]
async fn create_persists_verbatim_journal_with_clock_timestamps(owner: UserId) {
    let mut repo = MockJournalRepository::new();
    repo.expect_insert()
        .withf(move |journal| {
            journal.title().as_ref() == "  Day 1 " && journal.is_owned_by(&owner)
        })
        .times(1)
        .return_once(|_| Ok(()));

    let journal = service(repo)
        .create_journal(create_request("  Day 1 ", "    indented\nline\n", owner))
        .await
        .expect("create succeeds");

    assert_eq!(journal.title().as_ref(), "  Day 1 ");
    assert_eq!(journal.content().as_ref(), "    indented\nline\n");
    assert_eq!(journal.user_id(), &owner);
    assert_eq!(journal.created_at(), fixture_timestamp());
    assert_eq!(journal.updated_at(), fixture_timestamp());
}

#[rstest]
#[case("", "Hello", "title")]
#[case("Day 1", "   ", "content")]
#[tokio::test]
async fn create_rejects_blank_fields_without_touching_storage(
    owner: UserId,
    #[case] title: &str,
    #[case] content: &str,
    #[case] field: &str,
) {
    let mut repo = MockJournalRepository::new();
    repo.expect_insert().times(0);

    let error = service(repo)
        .create_journal(create_request(title, content, owner))
        .await
        .expect_err("blank input rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details attached");
    assert_eq!(details["field"], field);
}

#[rstest]
#[tokio::test]
async fn create_maps_unknown_owner_to_invalid_request(owner: UserId) {
    let mut repo = MockJournalRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Err(JournalRepositoryError::unknown_owner(owner.to_string())));

    let error = service(repo)
        .create_journal(create_request("Day 1", "Hello", owner))
        .await
        .expect_err("unknown owner rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.details().expect("details")["field"], "userId");
}

#[rstest]
#[case(JournalRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(JournalRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn list_maps_storage_failures(
    owner: UserId,
    #[case] failure: JournalRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockJournalRepository::new();
    repo.expect_list_for_user()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(repo)
        .list_journals(&owner)
        .await
        .expect_err("storage failure surfaces");
    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn list_passes_owner_through(owner: UserId) {
    let rows = vec![stored_journal(owner), stored_journal(owner)];
    let expected = rows.clone();
    let mut repo = MockJournalRepository::new();
    repo.expect_list_for_user()
        .withf(move |user_id| user_id == &owner)
        .times(1)
        .return_once(move |_| Ok(rows));

    let listed = service(repo).list_journals(&owner).await.expect("list succeeds");
    assert_eq!(listed, expected);
}

#[rstest]
#[tokio::test]
async fn get_returns_none_for_missing_journal(owner: UserId) {
    let mut repo = MockJournalRepository::new();
    repo.expect_find_owned().times(1).return_once(|_, _| Ok(None));

    let found = service(repo)
        .get_journal(&JournalId::random(), &owner)
        .await
        .expect("lookup succeeds");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn get_hides_rows_owned_by_someone_else(owner: UserId) {
    let foreign = stored_journal(UserId::random());
    let id = *foreign.id();
    let mut repo = MockJournalRepository::new();
    repo.expect_find_owned()
        .times(1)
        .return_once(move |_, _| Ok(Some(foreign)));

    let found = service(repo)
        .get_journal(&id, &owner)
        .await
        .expect("lookup succeeds");
    assert!(found.is_none());
}

#[rstest]
#[case(1)]
#[case(0)]
#[tokio::test]
async fn delete_reports_repository_count(owner: UserId, #[case] count: u64) {
    let id = JournalId::random();
    let mut repo = MockJournalRepository::new();
    repo.expect_delete_owned()
        .withf(move |journal_id, user_id| journal_id == &id && user_id == &owner)
        .times(1)
        .return_once(move |_, _| Ok(count));

    let response = service(repo)
        .delete_journal(DeleteJournalRequest { id, user_id: owner })
        .await
        .expect("delete succeeds");
    assert_eq!(response.deleted_count, count);
}
