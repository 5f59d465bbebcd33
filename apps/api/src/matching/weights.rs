#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Blend between the content-based and collaborative scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridWeights {
    pub content: f64,
    pub collaborative: f64,
}

impl Default for HybridWeights {
    fn default() -> Self {
        Self {
            content: 0.7,
            collaborative: 0.3,
        }
    }
}

/// Content-based factor weights. The four full weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentWeights {
    pub education: f64,
    /// Credit when the profile sits exactly one level below the requirement.
    pub education_near_miss: f64,
    pub field: f64,
    pub skills: f64,
    pub interests: f64,
}

impl Default for ContentWeights {
    fn default() -> Self {
        Self {
            education: 0.25,
            education_near_miss: 0.15,
            field: 0.20,
            skills: 0.30,
            interests: 0.25,
        }
    }
}

impl ContentWeights {
    pub fn sum(&self) -> f64 {
        self.education + self.field + self.skills + self.interests
    }
}

/// Collaborative-style factor weights. The three full weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeWeights {
    pub industry: f64,
    pub experience: f64,
    /// Deducted per year the profile falls short of the range minimum.
    pub experience_gap_penalty: f64,
    pub work_style: f64,
    /// Credit when the career lists work styles but none match.
    pub work_style_partial: f64,
}

impl Default for CollaborativeWeights {
    fn default() -> Self {
        Self {
            industry: 0.40,
            experience: 0.30,
            experience_gap_penalty: 0.05,
            work_style: 0.30,
            work_style_partial: 0.15,
        }
    }
}

impl CollaborativeWeights {
    pub fn sum(&self) -> f64 {
        self.industry + self.experience + self.work_style
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub hybrid: HybridWeights,
    pub content: ContentWeights,
    pub collaborative: CollaborativeWeights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_weights_sum_to_one() {
        assert!((ContentWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_collaborative_weights_sum_to_one() {
        assert!((CollaborativeWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_hybrid_split() {
        let w = HybridWeights::default();
        assert_eq!(w.content, 0.7);
        assert_eq!(w.collaborative, 0.3);
    }
}
