//! Axum route handlers for the recommendation API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::recommender::Recommendation;
use crate::models::career::Career;
use crate::models::profile::UserProfile;
use crate::state::AppState;

/// Upper bound on `topN` accepted from callers.
pub const MAX_TOP_N: usize = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopNQuery {
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
}

/// Resolves the requested `topN` against the configured default.
pub fn resolve_top_n(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    let top_n = requested.unwrap_or(default);
    if top_n == 0 || top_n > MAX_TOP_N {
        return Err(AppError::Validation(format!(
            "topN must be between 1 and {MAX_TOP_N}, got {top_n}"
        )));
    }
    Ok(top_n)
}

/// POST /api/ml/recommendations
///
/// Ranks the catalog against the submitted profile and returns the top N.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(query): Query<TopNQuery>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<RecommendationResponse>, AppError> {
    profile.validate()?;
    let top_n = resolve_top_n(query.top_n, state.config.default_top_n)?;

    let recommendations = state.recommender.recommend(&profile, top_n);
    debug!(
        "Scored {} careers, returning {}",
        state.catalog.len(),
        recommendations.len()
    );

    Ok(Json(RecommendationResponse {
        success: true,
        recommendations,
    }))
}

/// GET /api/ml/careers/:id
///
/// Returns a single enriched catalog entry.
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Career>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_defaults_to_config() {
        assert_eq!(resolve_top_n(None, 5).unwrap(), 5);
        assert_eq!(resolve_top_n(Some(2), 5).unwrap(), 2);
    }

    #[test]
    fn test_top_n_bounds() {
        assert!(resolve_top_n(Some(0), 5).is_err());
        assert!(resolve_top_n(Some(MAX_TOP_N + 1), 5).is_err());
        assert_eq!(resolve_top_n(Some(MAX_TOP_N), 5).unwrap(), MAX_TOP_N);
    }
}
