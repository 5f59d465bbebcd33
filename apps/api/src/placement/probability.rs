//! Heuristic placement probability: point buckets on a 0–100 scale,
//! normalized, plus a completeness bonus, capped below certainty.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

/// Upper bound on any estimate; the heuristic never claims near-certainty.
pub const PROBABILITY_CAP: f64 = 0.95;
const COMPLETENESS_STEP: f64 = 0.02;

pub fn education_points(level: &str) -> u32 {
    match level.trim().to_lowercase().as_str() {
        "phd" => 20,
        "postgraduate" => 18,
        "undergraduate" => 15,
        "self-taught / bootcamp" => 14,
        "diploma" => 12,
        "high school" => 8,
        _ => 10,
    }
}

pub fn skill_points(count: usize) -> u32 {
    match count {
        n if n >= 7 => 25,
        n if n >= 5 => 20,
        n if n >= 3 => 15,
        _ => 10,
    }
}

pub fn experience_points(years: u32) -> u32 {
    match years {
        y if y >= 5 => 20,
        y if y >= 3 => 16,
        y if y >= 1 => 12,
        _ => 6,
    }
}

/// Project tiers (up to 10) plus 5 for a portfolio.
pub fn project_points(projects: u32, has_portfolio: bool) -> u32 {
    let tier = match projects {
        p if p >= 5 => 10,
        p if p >= 3 => 7,
        p if p >= 1 => 4,
        _ => 0,
    };
    tier + if has_portfolio { 5 } else { 0 }
}

pub fn certification_points(count: usize) -> u32 {
    (count.saturating_mul(3)).min(10) as u32
}

pub fn commitment_points(commitment: &str) -> u32 {
    let commitment = commitment.to_lowercase();
    if commitment.contains("full-time") {
        10
    } else if commitment.contains("10–20") || commitment.contains("10-20") {
        7
    } else if commitment.contains("5–10") || commitment.contains("5-10") {
        5
    } else {
        3
    }
}

/// +0.02 for each of: work style, problem-solving approach, target
/// industries, career timeline.
pub fn completeness_bonus(profile: &UserProfile) -> f64 {
    let present = [
        profile.has_work_style(),
        profile.has_problem_solving_approach(),
        !profile.target_industries.is_empty(),
        profile.has_career_timeline(),
    ]
    .iter()
    .filter(|p| **p)
    .count();
    present as f64 * COMPLETENESS_STEP
}

pub fn raw_points(profile: &UserProfile) -> u32 {
    education_points(&profile.education_level)
        + skill_points(profile.skills.len())
        + experience_points(profile.years_experience)
        + project_points(profile.projects_completed, profile.has_portfolio())
        + certification_points(profile.certifications.len())
        + commitment_points(&profile.time_commitment)
}

/// Placement probability in [0, 0.95].
pub fn base_probability(profile: &UserProfile) -> f64 {
    let normalized = f64::from(raw_points(profile)) / 100.0;
    (normalized + completeness_bonus(profile)).min(PROBABILITY_CAP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Thresholds apply to the normalized probability, not the percentage.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.75 {
            ConfidenceTier::High
        } else if probability >= 0.50 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}
