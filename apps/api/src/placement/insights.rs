use crate::models::profile::UserProfile;

const MAX_INSIGHTS: usize = 5;

/// Rule-triggered observations in fixed order:
/// skills → experience → portfolio → certifications → projects.
pub fn generate_insights(profile: &UserProfile) -> Vec<String> {
    let mut insights = Vec::new();

    let skills = profile.skills.len();
    insights.push(
        if skills >= 5 {
            "✓ Strong skill portfolio increases your marketability"
        } else if skills >= 3 {
            "→ Good skill foundation, consider adding 2-3 more in-demand skills"
        } else {
            "⚠ Limited skills may reduce opportunities"
        }
        .to_string(),
    );

    let years = profile.years_experience;
    insights.push(
        if years >= 3 {
            "✓ Solid work experience is a major advantage"
        } else if years >= 1 {
            "→ Building experience, focus on quality projects"
        } else {
            "→ Hands-on projects can compensate for limited experience"
        }
        .to_string(),
    );

    insights.push(
        if profile.has_portfolio() {
            "✓ Portfolio showcases your work effectively"
        } else {
            "⚠ Missing portfolio - this is crucial for standing out"
        }
        .to_string(),
    );

    if !profile.certifications.is_empty() {
        insights.push("✓ Certifications validate your expertise".to_string());
    }

    if profile.projects_completed >= 3 {
        insights.push("✓ Multiple projects demonstrate practical skills".to_string());
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_profile_gets_three_insights() {
        let insights = generate_insights(&UserProfile::default());
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("Limited skills"));
        assert!(insights[1].contains("Hands-on projects"));
        assert!(insights[2].contains("Missing portfolio"));
    }

    #[test]
    fn test_full_profile_gets_five_in_priority_order() {
        let profile = UserProfile {
            skills: (0..6).map(|i| i.to_string()).collect(),
            years_experience: 4,
            portfolio_url: Some("https://me.dev".into()),
            certifications: vec!["AWS".into()],
            projects_completed: 3,
            ..Default::default()
        };
        let insights = generate_insights(&profile);
        assert_eq!(insights.len(), 5);
        assert!(insights[0].contains("skill portfolio"));
        assert!(insights[1].contains("work experience"));
        assert!(insights[2].contains("Portfolio showcases"));
        assert!(insights[3].contains("Certifications"));
        assert!(insights[4].contains("Multiple projects"));
    }

    #[test]
    fn test_mid_tier_messages() {
        let profile = UserProfile {
            skills: vec!["a".into(), "b".into(), "c".into()],
            years_experience: 1,
            ..Default::default()
        };
        let insights = generate_insights(&profile);
        assert!(insights[0].contains("Good skill foundation"));
        assert!(insights[1].contains("Building experience"));
    }
}
