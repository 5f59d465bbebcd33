use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::placement::improvements::{suggest_improvements, Improvement};
use crate::placement::insights::generate_insights;
use crate::placement::probability::{base_probability, ConfidenceTier};

/// Raw counts echoed back alongside the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthSummary {
    pub skills: usize,
    pub experience: u32,
    pub projects: u32,
    pub certifications: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    /// Percentage, 0–100, one decimal.
    pub probability: f64,
    pub confidence: ConfidenceTier,
    pub insights: Vec<String>,
    pub improvement_areas: Vec<Improvement>,
    pub profile_strength: StrengthSummary,
}

pub fn predict(profile: &UserProfile) -> PlacementResult {
    let probability = base_probability(profile);

    PlacementResult {
        probability: (probability * 1000.0).round() / 10.0,
        confidence: ConfidenceTier::from_probability(probability),
        insights: generate_insights(profile),
        improvement_areas: suggest_improvements(profile),
        profile_strength: StrengthSummary {
            skills: profile.skills.len(),
            experience: profile.years_experience,
            projects: profile.projects_completed,
            certifications: profile.certifications.len(),
        },
    }
}
