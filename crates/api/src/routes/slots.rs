use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots/parse", post(handlers::slots::parse_availability))
        .route("/api/slots/match", post(handlers::slots::match_availability))
}
