//! Ranks the catalog against a profile and builds recommendation records.
//!
//! `AppState` holds an `Arc<dyn CareerRecommender>`; `HybridRecommender` is
//! the rule-based default.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::matching::scoring::{missing_skills, score_career, CareerScore, ProfileSignals};
use crate::matching::timeline::estimate_timeline;
use crate::matching::weights::MatchWeights;
use crate::models::career::{Career, SalaryRange, MAX_TOP_COMPANIES};
use crate::models::profile::UserProfile;

/// Score components as percentages (0–100, two decimals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub content_based: f64,
    pub collaborative: f64,
    pub hybrid: f64,
}

impl From<CareerScore> for ScoreBreakdown {
    fn from(score: CareerScore) -> Self {
        Self {
            content_based: to_percentage(score.content),
            collaborative: to_percentage(score.collaborative),
            hybrid: to_percentage(score.hybrid),
        }
    }
}

/// One ranked career for a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub career: Career,
    pub match_percentage: f64,
    pub breakdown: ScoreBreakdown,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub timeline: String,
    pub salary_range: SalaryRange,
    pub target_companies: Vec<String>,
    pub growth_potential: String,
    pub demand_level: String,
}

pub trait CareerRecommender: Send + Sync {
    fn recommend(&self, profile: &UserProfile, top_n: usize) -> Vec<Recommendation>;
}

/// Content-based + collaborative-style hybrid over a shared catalog snapshot.
pub struct HybridRecommender {
    catalog: Arc<Catalog>,
    weights: MatchWeights,
}

impl HybridRecommender {
    pub fn new(catalog: Arc<Catalog>, weights: MatchWeights) -> Self {
        Self { catalog, weights }
    }
}

impl CareerRecommender for HybridRecommender {
    fn recommend(&self, profile: &UserProfile, top_n: usize) -> Vec<Recommendation> {
        recommend(self.catalog.careers(), profile, top_n, &self.weights)
    }
}

/// Scores every career, sorts by hybrid score descending (catalog order on
/// ties), and returns the first `top_n` as recommendations.
pub fn recommend(
    careers: &[Career],
    profile: &UserProfile,
    top_n: usize,
    weights: &MatchWeights,
) -> Vec<Recommendation> {
    let signals = ProfileSignals::from(profile);

    let mut scored: Vec<(&Career, CareerScore)> = careers
        .iter()
        .map(|career| (career, score_career(&signals, career, weights)))
        .collect();

    // Vec::sort_by is stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.1.hybrid.partial_cmp(&a.1.hybrid).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(top_n)
        .map(|(career, score)| build_recommendation(&signals, profile, career, score))
        .collect()
}

fn build_recommendation(
    signals: &ProfileSignals,
    profile: &UserProfile,
    career: &Career,
    score: CareerScore,
) -> Recommendation {
    let missing = missing_skills(signals, career);
    let timeline = estimate_timeline(profile, missing.len());

    Recommendation {
        match_percentage: to_percentage(score.hybrid),
        breakdown: score.into(),
        required_skills: career.required_skills.clone(),
        missing_skills: missing,
        timeline,
        salary_range: career.salary_range.clone(),
        target_companies: career
            .top_companies
            .iter()
            .take(MAX_TOP_COMPANIES)
            .cloned()
            .collect(),
        growth_potential: career.growth_rate.clone(),
        demand_level: career.demand.clone(),
        career: career.clone(),
    }
}

/// 0–1 score → percentage rounded to two decimals.
fn to_percentage(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback::builtin_careers;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::from_raw(builtin_careers()).unwrap()
    }

    fn developer_profile() -> UserProfile {
        UserProfile {
            education_level: "Undergraduate".into(),
            field_of_study: "Computer Science".into(),
            skills: vec!["React".into(), "SQL".into(), "Git".into()],
            interests: vec!["Coding".into(), "Building Things".into()],
            years_experience: 1,
            target_industries: vec!["Technology & Software".into()],
            work_style: Some("collaborative".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_recommendations_sorted_descending() {
        let catalog = catalog();
        let recs = recommend(catalog.careers(), &developer_profile(), 10, &MatchWeights::default());
        assert_eq!(recs.len(), catalog.len());
        for pair in recs.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
        assert_eq!(recs[0].career.title, "Full Stack Developer");
    }

    #[test]
    fn test_top_n_truncates() {
        let catalog = catalog();
        let recs = recommend(catalog.careers(), &developer_profile(), 1, &MatchWeights::default());
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let recs = recommend(&[], &developer_profile(), 5, &MatchWeights::default());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_ties_preserve_catalog_order() {
        let base = catalog().careers()[0].clone();
        let careers: Vec<Career> = ["a", "b", "c"]
            .iter()
            .map(|id| Career {
                id: id.to_string(),
                ..base.clone()
            })
            .collect();
        let recs = recommend(&careers, &UserProfile::default(), 3, &MatchWeights::default());
        let ids: Vec<&str> = recs.iter().map(|r| r.career.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reference_scenario_match_percentage() {
        let mut career = catalog().careers()[0].clone();
        career.required_education.fields.clear();
        career.required_skills = vec!["React".into(), "Node.js".into(), "SQL".into(), "Git".into()];
        career.related_interests = vec!["Coding".into(), "Building Things".into()];
        career.industries = vec!["Technology & Software".into()];

        let profile = UserProfile {
            education_level: "Undergraduate".into(),
            skills: vec!["React".into(), "SQL".into()],
            interests: vec!["Coding".into()],
            years_experience: 1,
            target_industries: vec!["Technology & Software".into()],
            work_style: Some("collaborative".into()),
            ..Default::default()
        };

        let recs = recommend(&[career], &profile, 5, &MatchWeights::default());
        assert_eq!(recs[0].match_percentage, 66.75);
        assert_eq!(recs[0].breakdown.content_based, 52.5);
        assert_eq!(recs[0].breakdown.collaborative, 100.0);
        assert_eq!(recs[0].breakdown.hybrid, 66.75);
        assert_eq!(recs[0].missing_skills, vec!["Node.js".to_string(), "Git".to_string()]);
        assert_eq!(recs[0].timeline, "0.8 years (10 months)");
    }

    #[test]
    fn test_target_companies_capped() {
        let mut career = catalog().careers()[0].clone();
        career.top_companies = (0..12).map(|i| format!("Company {i}")).collect();
        let recs = recommend(&[career], &developer_profile(), 1, &MatchWeights::default());
        assert_eq!(recs[0].target_companies.len(), MAX_TOP_COMPANIES);
    }

    #[test]
    fn test_recommender_trait_uses_shared_catalog() {
        let recommender = HybridRecommender::new(Arc::new(catalog()), MatchWeights::default());
        let recs = recommender.recommend(&developer_profile(), 2);
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let catalog = catalog();
        let recs = recommend(catalog.careers(), &developer_profile(), 1, &MatchWeights::default());
        let value = serde_json::to_value(&recs[0]).unwrap();
        assert!(value.get("matchPercentage").is_some());
        assert!(value["breakdown"].get("contentBased").is_some());
        assert!(value.get("missingSkills").is_some());
    }
}
