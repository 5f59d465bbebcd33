//! Improvement suggestions: independent rule checks, sorted by priority, top 4.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

const MAX_IMPROVEMENTS: usize = 4;

/// Declaration order is sort order: Critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    pub area: String,
    pub current: String,
    pub target: String,
    pub suggestion: String,
    /// Estimated gain, e.g. "+10-12% placement probability".
    pub impact: String,
    pub priority: Priority,
}

fn improvement(
    area: &str,
    current: String,
    target: &str,
    suggestion: &str,
    impact: &str,
    priority: Priority,
) -> Improvement {
    Improvement {
        area: area.to_string(),
        current,
        target: target.to_string(),
        suggestion: suggestion.to_string(),
        impact: impact.to_string(),
        priority,
    }
}

pub fn suggest_improvements(profile: &UserProfile) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    let skills = profile.skills.len();
    if skills < 5 {
        improvements.push(improvement(
            "Skills",
            format!("{skills} skills"),
            "5-7 skills",
            "Learn 2-3 more in-demand skills in your target domain",
            "+12-15% placement probability",
            Priority::High,
        ));
    }

    if !profile.has_portfolio() {
        improvements.push(improvement(
            "Portfolio",
            "No portfolio".to_string(),
            "Professional portfolio",
            "Create a portfolio website showcasing 3-5 best projects",
            "+10-12% placement probability",
            Priority::Critical,
        ));
    }

    let projects = profile.projects_completed;
    if projects < 3 {
        improvements.push(improvement(
            "Projects",
            format!("{projects} projects"),
            "3-5 projects",
            "Complete 2-3 real-world projects with modern tech stack",
            "+8-10% placement probability",
            Priority::High,
        ));
    }

    if profile.certifications.is_empty() {
        improvements.push(improvement(
            "Certifications",
            "No certifications".to_string(),
            "1-2 relevant certifications",
            "Get certified in your primary skill (e.g., AWS, Azure, Google Cloud)",
            "+5-7% placement probability",
            Priority::Medium,
        ));
    }

    if profile.years_experience == 0 {
        improvements.push(improvement(
            "Experience",
            "No professional experience".to_string(),
            "Internship or freelance work",
            "Gain 6-12 months of internship or freelance experience",
            "+15-20% placement probability",
            Priority::High,
        ));
    }

    // Stable: generation order survives within a priority.
    improvements.sort_by_key(|i| i.priority);
    improvements.truncate(MAX_IMPROVEMENTS);
    improvements
}
