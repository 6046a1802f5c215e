use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, get_calendar_stamps, get_record, get_records, record_exists, record_status,
    register_catalog,
};

/// Creates the API router with all reading record endpoints
///
/// Command endpoints:
/// - PUT /catalog/:isbn13 - Register a catalog entry
/// - POST /members/:member_id/records - Record a reading status
///
/// Query endpoints:
/// - GET /members/:member_id/records - List reading records
/// - GET /members/:member_id/records/:isbn13 - Get a reading record
/// - GET /members/:member_id/records/:isbn13/exists - Check whether a record exists
/// - GET /members/:member_id/stamps - List calendar stamps
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/catalog/:isbn13", put(register_catalog))
        .route(
            "/members/:member_id/records",
            get(get_records).post(record_status),
        )
        .route("/members/:member_id/records/:isbn13", get(get_record))
        .route(
            "/members/:member_id/records/:isbn13/exists",
            get(record_exists),
        )
        .route("/members/:member_id/stamps", get(get_calendar_stamps))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
