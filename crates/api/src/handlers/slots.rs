//! # Slot Handlers
//!
//! HTTP wrappers around the two engine entry points. Parsing and matching
//! themselves never fail; the only errors here come from request validation.
//!
//! Requests without an `anchor_date` are resolved against "today" from the
//! server's clock, which is pinned to the configured time zone.

use axum::{Json, extract::State};
use slotmatch_core::{
    match_slots,
    models::{MatchSlotsRequest, MatchSlotsResponse, ParseSlotsRequest, ParseSlotsResponse},
    parse_slots,
};
use std::sync::Arc;
use tracing::info;

use crate::{ApiState, middleware::error_handling::AppError};

/// Extracts slots from free text
///
/// # Endpoint
///
/// ```text
/// POST /api/slots/parse
/// { "text": "завтра 15-18, послезавтра 14-15.30", "anchor_date": "2025-09-14" }
/// ```
#[axum::debug_handler]
pub async fn parse_availability(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ParseSlotsRequest>,
) -> Result<Json<ParseSlotsResponse>, AppError> {
    let anchor_date = request
        .anchor_date
        .unwrap_or_else(|| state.clock.today());
    let slots = parse_slots(&request.text, anchor_date);

    info!(%anchor_date, slots = slots.len(), "parsed slots");
    Ok(Json(ParseSlotsResponse { anchor_date, slots }))
}

/// Matches candidate slots against recruiter slots
///
/// # Endpoint
///
/// ```text
/// POST /api/slots/match
/// {
///   "candidate": { "text": "завтра 15-18" },
///   "recruiter": { "slots": [ ... ] },
///   "min_confidence": 0.75,
///   "count": 3
/// }
/// ```
///
/// Each side is either raw text or previously parsed slots. Matches come
/// back best first; `min_confidence` and `count` trim the list after the
/// engine has ranked it.
///
/// # Errors
///
/// * `SlotError::Validation` - `min_confidence` outside `[0, 1]` or `count` of 0
#[axum::debug_handler]
pub async fn match_availability(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<MatchSlotsRequest>,
) -> Result<Json<MatchSlotsResponse>, AppError> {
    request.validate()?;

    let anchor_date = request
        .anchor_date
        .unwrap_or_else(|| state.clock.today());
    let candidate = request.candidate.into_slots(anchor_date);
    let recruiter = request.recruiter.into_slots(anchor_date);

    let mut matches = match_slots(&candidate, &recruiter);
    if let Some(min_confidence) = request.min_confidence {
        matches.retain(|found| found.confidence >= min_confidence);
    }
    if let Some(count) = request.count {
        matches.truncate(count);
    }

    info!(
        %anchor_date,
        candidate = candidate.len(),
        recruiter = recruiter.len(),
        matches = matches.len(),
        "matched slots"
    );
    Ok(Json(MatchSlotsResponse {
        anchor_date,
        matches,
    }))
}
