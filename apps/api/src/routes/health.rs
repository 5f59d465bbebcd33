use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Returns service identity and version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "careerpath",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// GET /health
/// Returns a simple status object with the loaded catalog size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "careerpath",
        "careersLoaded": state.catalog.len()
    }))
}
