use pretty_assertions::assert_eq;
use slotmatch_api::routes::health::{HealthResponse, VersionResponse};

use crate::test_utils::{anchor, test_server};

#[tokio::test]
async fn test_health_reports_anchor_date() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.anchor_date, anchor());
}

#[tokio::test]
async fn test_version() {
    let server = test_server();

    let body: VersionResponse = server.get("/version").await.json();
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}
