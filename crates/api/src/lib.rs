//! # SlotMatch API
//!
//! HTTP surface for the slot extraction and matching engine in
//! `slotmatch-core`.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into engine calls
//! - **Middleware**: Error mapping shared by every endpoint
//! - **Config**: Environment-driven settings, including the anchor time zone
//!
//! The engine is pure and synchronous, so handlers hold no locks and share
//! nothing but the anchor clock.

/// Configuration module for API settings
pub mod config;
/// Request handlers that call into the engine
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, StatusCode, header},
};
use eyre::Result;
use slotmatch_core::anchor::AnchorClock;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Supplies "today" for requests that carry no anchor date
    pub clock: Arc<dyn AnchorClock>,
}

impl ApiState {
    pub fn new(clock: impl AnchorClock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }
}

/// Builds the router with every endpoint attached to `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot parsing and matching endpoints
        .merge(routes::slots::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// Installs logging, wires the router with CORS, timeout and tracing layers,
/// and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(config.clock()));
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(AllowOrigin::list(origins));

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout and request tracing
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(HandleErrorLayer::new(|_: BoxError| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, timezone = %config.timezone, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
