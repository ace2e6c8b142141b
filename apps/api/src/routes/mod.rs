pub mod health;

use axum::{routing::get, Router};

use crate::feedback::handlers as feedback_handlers;
use crate::listing::handlers as listing_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes", get(listing_handlers::handle_list_resumes))
        .route(
            "/api/v1/resumes/:id",
            get(listing_handlers::handle_get_resume),
        )
        .route(
            "/api/v1/resumes/:id/feedback",
            get(feedback_handlers::handle_resume_feedback),
        )
        .with_state(state)
}
