use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A single self-reported skill proficiency (1 = novice, 5 = expert).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillProficiency {
    #[serde(default)]
    pub skill: String,
    #[serde(default = "default_proficiency_level")]
    pub level: u8,
}

/// Unrated skills count as intermediate.
fn default_proficiency_level() -> u8 {
    3
}

/// Career-readiness profile supplied by the caller.
///
/// Every field is optional on the wire. Absent values deserialize to the
/// neutral default (empty string, empty list, zero, `None`, `false`) so the
/// scoring engine never has to special-case a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    // Background
    pub education_level: String,
    pub field_of_study: String,
    pub current_status: String,
    pub experience_level: String,

    // Skills & interests
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub starting_fresh: bool,

    // Goals
    pub primary_objectives: Vec<String>,
    pub preferred_domains: Vec<String>,
    pub learning_style: String,
    pub time_commitment: String,

    // Professional details
    pub years_experience: u32,
    pub target_industries: Vec<String>,
    pub career_timeline: Option<String>,

    // Personality
    pub work_style: Option<String>,
    pub problem_solving_approach: Option<String>,
    pub learning_pace: Option<String>,
    pub leadership_aspirations: bool,

    // Placement signals
    pub skill_proficiency: Vec<SkillProficiency>,
    pub certifications: Vec<String>,
    pub projects_completed: u32,
    pub portfolio_url: Option<String>,
}

impl UserProfile {
    /// Lowercased skill set used for every overlap computation.
    pub fn skill_set(&self) -> HashSet<String> {
        lowercase_set(&self.skills)
    }

    pub fn interest_set(&self) -> HashSet<String> {
        lowercase_set(&self.interests)
    }

    pub fn industry_set(&self) -> HashSet<String> {
        lowercase_set(&self.target_industries)
    }

    pub fn has_portfolio(&self) -> bool {
        is_present(self.portfolio_url.as_deref())
    }

    pub fn has_work_style(&self) -> bool {
        is_present(self.work_style.as_deref())
    }

    pub fn has_career_timeline(&self) -> bool {
        is_present(self.career_timeline.as_deref())
    }

    pub fn has_problem_solving_approach(&self) -> bool {
        is_present(self.problem_solving_approach.as_deref())
    }

    pub fn has_learning_pace(&self) -> bool {
        is_present(self.learning_pace.as_deref())
    }

    /// Returns the first proficiency entry outside the 1–5 scale, if any.
    pub fn invalid_proficiency(&self) -> Option<&SkillProficiency> {
        self.skill_proficiency
            .iter()
            .find(|p| !(1..=5).contains(&p.level))
    }

    /// Rejects structurally invalid payloads. Absent fields are never an error.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(p) = self.invalid_proficiency() {
            return Err(AppError::Validation(format!(
                "skillProficiency level for '{}' must be between 1 and 5, got {}",
                p.skill, p.level
            )));
        }
        Ok(())
    }
}

/// Lowercases and trims every non-blank entry into a set.
pub fn lowercase_set(items: &[String]) -> HashSet<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_present(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_deserializes_to_neutral_profile() {
        let profile: UserProfile = serde_json::from_value(json!({})).unwrap();
        assert!(profile.skills.is_empty());
        assert_eq!(profile.years_experience, 0);
        assert!(profile.work_style.is_none());
        assert!(!profile.has_portfolio());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let profile: UserProfile = serde_json::from_value(json!({
            "educationLevel": "Undergraduate",
            "yearsExperience": 2,
            "targetIndustries": ["Technology & Software"],
            "portfolioUrl": "https://example.dev"
        }))
        .unwrap();
        assert_eq!(profile.education_level, "Undergraduate");
        assert_eq!(profile.years_experience, 2);
        assert_eq!(profile.target_industries.len(), 1);
        assert!(profile.has_portfolio());
    }

    #[test]
    fn test_skill_set_is_case_insensitive() {
        let profile = UserProfile {
            skills: vec!["React".into(), "react".into(), " SQL ".into(), "".into()],
            ..Default::default()
        };
        let set = profile.skill_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("react"));
        assert!(set.contains("sql"));
    }

    #[test]
    fn test_blank_optional_strings_are_absent() {
        let profile = UserProfile {
            work_style: Some("   ".into()),
            portfolio_url: Some(String::new()),
            ..Default::default()
        };
        assert!(!profile.has_work_style());
        assert!(!profile.has_portfolio());
    }

    #[test]
    fn test_proficiency_level_defaults_to_intermediate() {
        let profile: UserProfile =
            serde_json::from_value(json!({"skillProficiency": [{"skill": "Rust"}]})).unwrap();
        assert_eq!(profile.skill_proficiency[0].level, 3);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_invalid_proficiency_detected() {
        let profile = UserProfile {
            skill_proficiency: vec![
                SkillProficiency { skill: "Rust".into(), level: 4 },
                SkillProficiency { skill: "Go".into(), level: 9 },
            ],
            ..Default::default()
        };
        assert_eq!(profile.invalid_proficiency().unwrap().skill, "Go");
        assert!(matches!(profile.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_default_profile_is_valid() {
        assert!(UserProfile::default().validate().is_ok());
    }
}
