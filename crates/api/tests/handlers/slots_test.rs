use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use slotmatch_core::models::{
    DateMatchKind, MatchSlotsResponse, ParseSlotsResponse, TimeMatchKind,
};

use crate::test_utils::{anchor, test_server};

#[tokio::test]
async fn test_parse_with_explicit_anchor() {
    let server = test_server();

    let response = server
        .post("/api/slots/parse")
        .json(&json!({
            "text": "в четверг утром",
            "anchor_date": "2025-09-15"
        }))
        .await;
    response.assert_status_ok();

    let body: ParseSlotsResponse = response.json();
    assert_eq!(body.anchor_date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
    assert_eq!(body.slots.len(), 1);
    assert_eq!(body.slots[0].to_string(), "2025-09-18 morning (09:00-12:00)");
}

#[tokio::test]
async fn test_parse_defaults_to_clock() {
    let server = test_server();

    let body: ParseSlotsResponse = server
        .post("/api/slots/parse")
        .json(&json!({ "text": "завтра 15-18, послезавтра 14-15.30" }))
        .await
        .json();

    assert_eq!(body.anchor_date, anchor());
    let rendered: Vec<String> = body.slots.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["2025-09-15 15:00-18:00", "2025-09-16 14:00-15:30"]
    );
}

#[tokio::test]
async fn test_parse_without_slots_is_not_an_error() {
    let server = test_server();

    let response = server
        .post("/api/slots/parse")
        .json(&json!({ "text": "добрый день, пока не знаю" }))
        .await;
    response.assert_status_ok();

    let body: ParseSlotsResponse = response.json();
    assert!(body.slots.is_empty());
}

#[tokio::test]
async fn test_parse_rejects_missing_text() {
    let server = test_server();

    let response = server.post("/api/slots/parse").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_match_text_against_text() {
    let server = test_server();

    let response = server
        .post("/api/slots/match")
        .json(&json!({
            "candidate": { "text": "завтра 15-18" },
            "recruiter": { "text": "завтра 16-17, послезавтра 10-11" }
        }))
        .await;
    response.assert_status_ok();

    let body: MatchSlotsResponse = response.json();
    assert_eq!(body.matches.len(), 1);

    let found = &body.matches[0];
    assert_eq!(found.date_match.kind, DateMatchKind::Exact);
    assert_eq!(found.time_match.kind, TimeMatchKind::Overlap);
    assert_eq!(found.confidence, 1.0);
    assert_eq!(found.recruiter_slot.original_text, "завтра 16-17");
}

#[tokio::test]
async fn test_match_previously_parsed_slots() {
    let server = test_server();

    let parsed: Value = server
        .post("/api/slots/parse")
        .json(&json!({ "text": "любой день с 12 до 19" }))
        .await
        .json();

    let body: MatchSlotsResponse = server
        .post("/api/slots/match")
        .json(&json!({
            "candidate": { "slots": parsed["slots"] },
            "recruiter": { "text": "послезавтра 13:00-14:00" }
        }))
        .await
        .json();

    assert_eq!(body.matches.len(), 1);
    assert_eq!(body.matches[0].date_match.kind, DateMatchKind::Flexible);
    assert_eq!(body.matches[0].time_match.kind, TimeMatchKind::Flexible);
}

#[tokio::test]
async fn test_match_threshold_and_count() {
    let server = test_server();
    let request = |min_confidence: Value, count: Value| {
        json!({
            "candidate": { "text": "завтра 10-12, завтра утром" },
            "recruiter": { "text": "завтра 10:00-10:40" },
            "min_confidence": min_confidence,
            "count": count
        })
    };

    // 40 minutes of overlap scores 0.83; the morning period scores 0.9.
    let all: MatchSlotsResponse = server
        .post("/api/slots/match")
        .json(&request(Value::Null, Value::Null))
        .await
        .json();
    assert_eq!(all.matches.len(), 2);
    assert_eq!(all.matches[0].time_match.kind, TimeMatchKind::Flexible);

    let strict: MatchSlotsResponse = server
        .post("/api/slots/match")
        .json(&request(json!(0.85), Value::Null))
        .await
        .json();
    assert_eq!(strict.matches.len(), 1);

    let first: MatchSlotsResponse = server
        .post("/api/slots/match")
        .json(&request(Value::Null, json!(1)))
        .await
        .json();
    assert_eq!(first.matches.len(), 1);
    assert_eq!(first.matches[0].time_match.kind, TimeMatchKind::Flexible);
}

#[tokio::test]
async fn test_match_validation_errors() {
    let server = test_server();

    let response = server
        .post("/api/slots/match")
        .json(&json!({
            "candidate": { "text": "завтра 15-18" },
            "recruiter": { "text": "завтра 16-17" },
            "count": 0
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: count must be at least 1");

    let response = server
        .post("/api/slots/match")
        .json(&json!({
            "candidate": { "text": "завтра 15-18" },
            "recruiter": { "text": "завтра 16-17" },
            "min_confidence": 2.0
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

fn supplied_slot(start: u16, end: u16, confidence: f64) -> Value {
    json!({
        "original_text": "завтра 15-18",
        "date": {
            "type": "relative",
            "word": "завтра",
            "day_offset": 1,
            "resolved_date": "2025-09-15"
        },
        "time": {
            "kind": { "type": "range", "start": start, "end": end },
            "is_flexible": false
        },
        "confidence": confidence
    })
}

#[rstest]
#[case::backwards_range(supplied_slot(1080, 900, 1.0), StatusCode::BAD_REQUEST)]
#[case::confidence_above_one(supplied_slot(900, 1080, 7.5), StatusCode::BAD_REQUEST)]
#[case::minutes_past_end_of_day(supplied_slot(0, 5000, 1.0), StatusCode::UNPROCESSABLE_ENTITY)]
#[tokio::test]
async fn test_match_rejects_invalid_supplied_slots(
    #[case] slot: Value,
    #[case] expected: StatusCode,
) {
    let server = test_server();

    let response = server
        .post("/api/slots/match")
        .json(&json!({
            "candidate": { "slots": [slot] },
            "recruiter": { "text": "завтра 16-17" }
        }))
        .await;
    response.assert_status(expected);
}

#[tokio::test]
async fn test_match_accepts_valid_supplied_slots() {
    let server = test_server();

    let body: MatchSlotsResponse = server
        .post("/api/slots/match")
        .json(&json!({
            "candidate": { "slots": [supplied_slot(900, 1080, 1.0)] },
            "recruiter": { "text": "завтра 16-17" }
        }))
        .await
        .json();
    assert_eq!(body.matches.len(), 1);
    assert_eq!(
        body.matches[0].time_match.overlap.map(|window| window.to_string()),
        Some("16:00-17:00".to_string())
    );
}
