use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::placement::predictor::{predict, PlacementResult};

#[derive(Debug, Serialize)]
pub struct PlacementResponse {
    pub success: bool,
    pub prediction: PlacementResult,
}

/// POST /api/ml/placement-probability
pub async fn handle_placement(
    Json(profile): Json<UserProfile>,
) -> Result<Json<PlacementResponse>, AppError> {
    profile.validate()?;

    let prediction = predict(&profile);
    debug!(
        "Placement estimate {}% ({:?})",
        prediction.probability, prediction.confidence
    );

    Ok(Json(PlacementResponse {
        success: true,
        prediction,
    }))
}
