//! Content-based and collaborative-style similarity between a profile and one career.
//!
//! Every factor is additive and capped at its own weight, so partial credit on
//! one factor never moves another. Empty denominators contribute 0.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::weights::{CollaborativeWeights, ContentWeights, HybridWeights, MatchWeights};
use crate::models::career::Career;
use crate::models::profile::{lowercase_set, UserProfile};

/// Ordinal rank of an education level. Unknown strings rank 0.
pub fn education_rank(level: &str) -> u8 {
    match level.trim().to_lowercase().as_str() {
        "high school" => 1,
        "diploma" => 2,
        "undergraduate" => 3,
        "postgraduate" => 4,
        "phd" => 5,
        _ => 0,
    }
}

/// Lowercased view of a profile, computed once and reused across the catalog.
#[derive(Debug, Clone)]
pub struct ProfileSignals {
    pub education_rank: u8,
    pub field_of_study: String,
    pub skills: HashSet<String>,
    pub interests: HashSet<String>,
    pub industries: HashSet<String>,
    pub years_experience: u32,
    pub work_style: Option<String>,
}

impl From<&UserProfile> for ProfileSignals {
    fn from(profile: &UserProfile) -> Self {
        Self {
            education_rank: education_rank(&profile.education_level),
            field_of_study: profile.field_of_study.trim().to_lowercase(),
            skills: profile.skill_set(),
            interests: profile.interest_set(),
            industries: profile.industry_set(),
            years_experience: profile.years_experience,
            work_style: profile
                .work_style
                .as_deref()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Per-career score components, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CareerScore {
    pub content: f64,
    pub collaborative: f64,
    pub hybrid: f64,
}

pub fn score_career(signals: &ProfileSignals, career: &Career, weights: &MatchWeights) -> CareerScore {
    let content = content_based_score(signals, career, &weights.content);
    let collaborative = collaborative_score(signals, career, &weights.collaborative);
    CareerScore {
        content,
        collaborative,
        hybrid: hybrid_score(content, collaborative, &weights.hybrid),
    }
}

pub fn hybrid_score(content: f64, collaborative: f64, weights: &HybridWeights) -> f64 {
    weights.content * content + weights.collaborative * collaborative
}

// ────────────────────────────────────────────────────────────────────────────
// Content-based factors
// ────────────────────────────────────────────────────────────────────────────

pub fn content_based_score(signals: &ProfileSignals, career: &Career, w: &ContentWeights) -> f64 {
    education_score(signals, career, w)
        + field_score(signals, career, w)
        + skill_score(signals, career, w)
        + interest_score(signals, career, w)
}

fn education_score(signals: &ProfileSignals, career: &Career, w: &ContentWeights) -> f64 {
    let required = education_rank(&career.required_education.level);
    if signals.education_rank >= required {
        w.education
    } else if signals.education_rank + 1 == required {
        w.education_near_miss
    } else {
        0.0
    }
}

/// Either-direction substring match against the accepted fields.
/// A blank field of study never matches.
fn field_score(signals: &ProfileSignals, career: &Career, w: &ContentWeights) -> f64 {
    let field = signals.field_of_study.as_str();
    if field.is_empty() {
        return 0.0;
    }
    let matched = career
        .required_education
        .fields
        .iter()
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
        .any(|f| f.contains(field) || field.contains(f.as_str()));
    if matched {
        w.field
    } else {
        0.0
    }
}

fn skill_score(signals: &ProfileSignals, career: &Career, w: &ContentWeights) -> f64 {
    w.skills * overlap_ratio(&signals.skills, &lowercase_set(&career.required_skills))
}

fn interest_score(signals: &ProfileSignals, career: &Career, w: &ContentWeights) -> f64 {
    w.interests * overlap_ratio(&signals.interests, &lowercase_set(&career.related_interests))
}

// ────────────────────────────────────────────────────────────────────────────
// Collaborative-style factors
// ────────────────────────────────────────────────────────────────────────────

pub fn collaborative_score(
    signals: &ProfileSignals,
    career: &Career,
    w: &CollaborativeWeights,
) -> f64 {
    industry_score(signals, career, w)
        + experience_score(signals, career, w)
        + work_style_score(signals, career, w)
}

/// Share of the profile's target industries this career covers.
fn industry_score(signals: &ProfileSignals, career: &Career, w: &CollaborativeWeights) -> f64 {
    w.industry * overlap_ratio(&lowercase_set(&career.industries), &signals.industries)
}

/// Over-experienced candidates keep full credit; only a shortfall is penalized.
fn experience_score(signals: &ProfileSignals, career: &Career, w: &CollaborativeWeights) -> f64 {
    let range = career.experience_range;
    let years = signals.years_experience;
    if range.contains(years) || years > range.max {
        return w.experience;
    }
    let gap = f64::from(range.min - years);
    (w.experience - w.experience_gap_penalty * gap).max(0.0)
}

fn work_style_score(signals: &ProfileSignals, career: &Career, w: &CollaborativeWeights) -> f64 {
    let styles = lowercase_set(&career.suitable_work_styles);
    if styles.is_empty() {
        return 0.0;
    }
    match &signals.work_style {
        Some(style) if styles.contains(style) => w.work_style,
        _ => w.work_style_partial,
    }
}

/// |have ∩ want| / |want|, or 0 when `want` is empty.
fn overlap_ratio(have: &HashSet<String>, want: &HashSet<String>) -> f64 {
    if want.is_empty() {
        return 0.0;
    }
    let hits = want.iter().filter(|item| have.contains(*item)).count();
    hits as f64 / want.len() as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Missing skills
// ────────────────────────────────────────────────────────────────────────────

/// Required skills the profile lacks, in catalog spelling and order,
/// deduplicated case-insensitively.
pub fn missing_skills(signals: &ProfileSignals, career: &Career) -> Vec<String> {
    let mut seen = HashSet::new();
    career
        .required_skills
        .iter()
        .filter(|skill| {
            let key = skill.trim().to_lowercase();
            !key.is_empty() && !signals.skills.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect()
}
