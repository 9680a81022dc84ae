use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use slotmatch_api::{ApiState, router};
use slotmatch_core::anchor::FixedClock;

/// The pinned "today" of every test server: Sunday, 2025-09-14.
pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 14).unwrap()
}

pub fn test_server() -> TestServer {
    let state = Arc::new(ApiState::new(FixedClock(anchor())));
    TestServer::new(router(state)).expect("Failed to start test server")
}
