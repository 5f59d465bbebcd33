use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::strength::{profile_strength, ProfileStrength};
use crate::errors::AppError;
use crate::matching::handlers::{resolve_top_n, TopNQuery};
use crate::matching::recommender::Recommendation;
use crate::models::profile::UserProfile;
use crate::placement::predictor::{predict, PlacementResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeProfileResponse {
    pub success: bool,
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<Recommendation>,
    pub placement: PlacementResult,
    pub profile_strength: ProfileStrength,
}

/// POST /api/ml/analyze-profile
///
/// Recommendations, placement estimate, and overall strength in one response.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Query(query): Query<TopNQuery>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<AnalyzeProfileResponse>, AppError> {
    profile.validate()?;
    let top_n = resolve_top_n(query.top_n, state.config.default_top_n)?;

    let analysis_id = Uuid::new_v4();
    let recommendations = state.recommender.recommend(&profile, top_n);
    let placement = predict(&profile);
    let profile_strength = profile_strength(&profile);

    info!(
        %analysis_id,
        recommendations = recommendations.len(),
        probability = placement.probability,
        "Profile analysis complete"
    );

    Ok(Json(AnalyzeProfileResponse {
        success: true,
        analysis_id,
        generated_at: Utc::now(),
        recommendations,
        placement,
        profile_strength,
    }))
}
