use axum::{http::StatusCode, response::IntoResponse};
use rstest::rstest;
use slotmatch_api::middleware::error_handling::AppError;
use slotmatch_core::errors::SlotError;

#[rstest]
#[case(SlotError::Validation("count must be at least 1".into()), StatusCode::BAD_REQUEST)]
#[case(SlotError::InvalidTimezone("Mars/Olympus".into()), StatusCode::BAD_REQUEST)]
#[case(SlotError::Config(eyre::eyre!("bad port")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: SlotError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();
    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_becomes_server_error() {
    let error: AppError = eyre::eyre!("clock unavailable").into();
    assert_eq!(
        error.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
