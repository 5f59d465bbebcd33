//! Readiness timeline: months until a profile is ready for a career.

use crate::models::profile::UserProfile;

const BASE_MONTHS: i64 = 6;
const MONTHS_PER_MISSING_SKILL: i64 = 2;
const MIN_MONTHS: i64 = 3;
const MAX_MONTHS: i64 = 24;

/// Estimated months to readiness, clamped to [3, 24].
///
/// Each multiplier is applied to the running total and truncated to whole
/// months before the next step.
pub fn estimate_months(profile: &UserProfile, missing_skill_count: usize) -> u32 {
    let mut months = BASE_MONTHS + MONTHS_PER_MISSING_SKILL * missing_skill_count as i64;

    match profile.experience_level.trim().to_lowercase().as_str() {
        "beginner" => months += 3,
        "advanced" => months -= 2,
        _ => {}
    }

    let commitment = profile.time_commitment.to_lowercase();
    if commitment.contains("full-time") {
        months = scale(months, 0.7);
    } else if commitment.contains("less than 5") {
        months = scale(months, 1.5);
    }

    match profile
        .learning_pace
        .as_deref()
        .map(|p| p.trim().to_lowercase())
        .as_deref()
    {
        Some("fast") => months = scale(months, 0.8),
        Some("thorough") => months = scale(months, 1.2),
        _ => {}
    }

    months.clamp(MIN_MONTHS, MAX_MONTHS) as u32
}

/// `"N months"` up to six months, `"Y.y years (N months)"` beyond.
pub fn format_timeline(months: u32) -> String {
    if months <= 6 {
        format!("{months} months")
    } else {
        format!("{:.1} years ({months} months)", f64::from(months) / 12.0)
    }
}

pub fn estimate_timeline(profile: &UserProfile, missing_skill_count: usize) -> String {
    format_timeline(estimate_months(profile, missing_skill_count))
}

fn scale(months: i64, factor: f64) -> i64 {
    (months as f64 * factor) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_with_missing_skills() {
        let profile = UserProfile::default();
        assert_eq!(estimate_months(&profile, 0), 6);
        assert_eq!(estimate_months(&profile, 1), 8);
        assert_eq!(estimate_months(&profile, 5), 16);
    }

    #[test]
    fn test_experience_level_adjustment() {
        let beginner = UserProfile {
            experience_level: "beginner".into(),
            ..Default::default()
        };
        assert_eq!(estimate_months(&beginner, 0), 9);

        let advanced = UserProfile {
            experience_level: "advanced".into(),
            ..Default::default()
        };
        assert_eq!(estimate_months(&advanced, 0), 4);
    }

    #[test]
    fn test_multipliers_truncate_after_each_step() {
        // 6 + 2*2 = 10 → full-time ×0.7 = 7 → fast ×0.8 = 5.6 → 5
        let profile = UserProfile {
            time_commitment: "Full-time learning".into(),
            learning_pace: Some("fast".into()),
            ..Default::default()
        };
        assert_eq!(estimate_months(&profile, 2), 5);
    }

    #[test]
    fn test_low_commitment_and_thorough_pace() {
        // 6 + 2*3 = 12 → ×1.5 = 18 → ×1.2 = 21.6 → 21
        let profile = UserProfile {
            time_commitment: "Less than 5 hours".into(),
            learning_pace: Some("thorough".into()),
            ..Default::default()
        };
        assert_eq!(estimate_months(&profile, 3), 21);
    }

    #[test]
    fn test_clamped_to_upper_bound() {
        let profile = UserProfile {
            experience_level: "beginner".into(),
            time_commitment: "Less than 5 hours".into(),
            ..Default::default()
        };
        assert_eq!(estimate_months(&profile, 20), 24);
    }

    #[test]
    fn test_clamped_to_lower_bound() {
        // 6 - 2 = 4 → ×0.7 = 2 → ×0.8 = 1 → clamp 3
        let profile = UserProfile {
            experience_level: "advanced".into(),
            time_commitment: "Full-time".into(),
            learning_pace: Some("fast".into()),
            ..Default::default()
        };
        assert_eq!(estimate_months(&profile, 0), 3);
    }

    #[test]
    fn test_format_switches_after_six_months() {
        assert_eq!(format_timeline(3), "3 months");
        assert_eq!(format_timeline(6), "6 months");
        assert_eq!(format_timeline(8), "0.7 years (8 months)");
        assert_eq!(format_timeline(16), "1.3 years (16 months)");
        assert_eq!(format_timeline(24), "2.0 years (24 months)");
    }

    #[test]
    fn test_estimate_timeline_renders_estimate() {
        assert_eq!(estimate_timeline(&UserProfile::default(), 2), "0.8 years (10 months)");
    }
}
