//! Overall profile strength: a coarse 0–100 readiness score shown next to
//! recommendations and the placement estimate.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    Strong,
    Good,
    Developing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthBreakdown {
    pub skills: usize,
    pub experience: u32,
    pub education: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStrength {
    pub score: u32,
    pub level: StrengthLevel,
    pub breakdown: StrengthBreakdown,
}

const EDUCATION_POINTS: &[(&str, u32)] = &[
    ("phd", 20),
    ("postgraduate", 18),
    ("undergraduate", 15),
    ("diploma", 12),
    ("high school", 8),
];

pub fn profile_strength(profile: &UserProfile) -> ProfileStrength {
    let skills = profile.skills.len();
    let years = profile.years_experience;

    let skill_points = match skills {
        n if n >= 5 => 30,
        n if n >= 3 => 20,
        _ => 10,
    };

    let experience_points = match years {
        y if y >= 3 => 25,
        y if y >= 1 => 15,
        _ => 5,
    };

    let education = profile.education_level.trim().to_lowercase();
    let education_points = EDUCATION_POINTS
        .iter()
        .find(|(level, _)| *level == education)
        .map(|(_, points)| *points)
        .unwrap_or(10);

    let goal_points = if profile.has_career_timeline() && !profile.target_industries.is_empty() {
        15
    } else if !profile.primary_objectives.is_empty() {
        10
    } else {
        5
    };

    let completeness_points = if profile.has_work_style() && profile.has_learning_pace() {
        10
    } else {
        5
    };

    let score =
        (skill_points + experience_points + education_points + goal_points + completeness_points)
            .min(100);

    let level = match score {
        s if s >= 75 => StrengthLevel::Strong,
        s if s >= 50 => StrengthLevel::Good,
        _ => StrengthLevel::Developing,
    };

    let education_label = if profile.education_level.trim().is_empty() {
        "Unknown".to_string()
    } else {
        profile.education_level.clone()
    };

    ProfileStrength {
        score,
        level,
        breakdown: StrengthBreakdown {
            skills,
            experience: years,
            education: education_label,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_is_developing() {
        let strength = profile_strength(&UserProfile::default());
        // 10 + 5 + 10 + 5 + 5
        assert_eq!(strength.score, 35);
        assert_eq!(strength.level, StrengthLevel::Developing);
        assert_eq!(strength.breakdown.education, "Unknown");
    }

    #[test]
    fn test_complete_profile_is_strong() {
        let profile = UserProfile {
            education_level: "Postgraduate".into(),
            skills: (0..5).map(|i| i.to_string()).collect(),
            years_experience: 3,
            career_timeline: Some("1year".into()),
            target_industries: vec!["Consulting".into()],
            work_style: Some("leadership".into()),
            learning_pace: Some("fast".into()),
            ..Default::default()
        };
        let strength = profile_strength(&profile);
        // 30 + 25 + 18 + 15 + 10
        assert_eq!(strength.score, 98);
        assert_eq!(strength.level, StrengthLevel::Strong);
        assert_eq!(strength.breakdown.education, "Postgraduate");
    }

    #[test]
    fn test_objectives_count_when_goals_incomplete() {
        let profile = UserProfile {
            education_level: "Undergraduate".into(),
            skills: vec!["a".into(), "b".into(), "c".into()],
            years_experience: 1,
            primary_objectives: vec!["Switch careers".into()],
            ..Default::default()
        };
        let strength = profile_strength(&profile);
        // 20 + 15 + 15 + 10 + 5
        assert_eq!(strength.score, 65);
        assert_eq!(strength.level, StrengthLevel::Good);
    }
}
