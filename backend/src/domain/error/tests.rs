//! Domain error construction and serialisation.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("nope"), ErrorCode::Unauthorized)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn no_trace_id_outside_request_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE.parse().expect("valid uuid");
    let err = TraceId::scope(trace_id, async { Error::conflict("taken") }).await;
    assert_eq!(err.trace_id(), Some(TRACE));
}

#[rstest]
fn serialises_camel_case_and_skips_absent_fields() {
    let err = Error::invalid_request("title must not be empty");
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "title must not be empty" })
    );
}

#[rstest]
fn serialises_trace_id_and_details() {
    let err = Error::invalid_request("bad")
        .with_trace_id(TRACE)
        .with_details(json!({ "field": "userId" }));
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(value["traceId"], TRACE);
    assert_eq!(value["details"]["field"], "userId");
}

#[rstest]
fn deserialising_blank_message_fails() {
    let payload = json!({ "code": "internal_error", "message": " " });
    assert!(serde_json::from_value::<Error>(payload).is_err());
}
