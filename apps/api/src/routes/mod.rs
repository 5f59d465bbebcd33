pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::matching::handlers as matching;
use crate::placement::handlers as placement;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/ml/careers/:id", get(matching::handle_get_career))
        // Scoring
        .route(
            "/api/ml/recommendations",
            post(matching::handle_recommendations),
        )
        .route(
            "/api/ml/placement-probability",
            post(placement::handle_placement),
        )
        .route(
            "/api/ml/analyze-profile",
            post(analysis::handle_analyze_profile),
        )
        .with_state(state)
}
