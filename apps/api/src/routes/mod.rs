pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job analysis
        .route("/api/v1/job", post(handlers::handle_analyze_job))
        .route("/api/v1/job", get(handlers::handle_get_job))
        // Screening
        .route("/api/v1/screen", post(handlers::handle_run_screening))
        .route("/api/v1/results", get(handlers::handle_get_results))
        // Single-résumé scoring
        .route("/api/v1/resumes", post(handlers::handle_upload_resume))
        .route("/api/v1/resumes/score", post(handlers::handle_score_profile))
        .with_state(state)
}
