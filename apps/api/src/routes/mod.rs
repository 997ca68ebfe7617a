pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::errors::panic_response;
use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/process_resume", post(handlers::handle_process_resume))
        .route("/process_resume/", post(handlers::handle_process_resume))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Mirrors the request origin so credentials stay allowed for any origin.
                .layer(CorsLayer::very_permissive())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}
