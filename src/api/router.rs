use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_booking, list_available_desks};

/// Creates the API router with all desk booking endpoints
///
/// Command endpoints (Write operations):
/// - POST /bookings - Book a desk for a date
///
/// Query endpoints (Read operations):
/// - GET /desks/available - List desks available on a date
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/bookings", post(create_booking))
        // Query endpoints (Read operations)
        .route("/desks/available", get(list_available_desks))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
