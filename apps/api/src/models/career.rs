use serde::{Deserialize, Serialize};

/// Maximum number of target companies carried on a career or recommendation.
pub const MAX_TOP_COMPANIES: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredEducation {
    pub level: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: u32,
    pub max: u32,
}

impl ExperienceRange {
    pub fn contains(&self, years: u32) -> bool {
        self.min <= years && years <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// A catalog entry as it appears on disk. Only `id` and `title` are
/// structurally required; everything else may be backfilled by enrichment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCareer {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub required_education: Option<RequiredEducation>,
    pub required_skills: Option<Vec<String>>,
    pub related_interests: Option<Vec<String>>,
    pub industries: Option<Vec<String>>,
    pub experience_range: Option<ExperienceRange>,
    pub suitable_work_styles: Option<Vec<String>>,
    pub salary_range: Option<SalaryRange>,
    pub top_companies: Option<Vec<String>>,
    pub demand: Option<String>,
    pub growth_rate: Option<String>,
}

/// A fully enriched catalog entry. Every field is guaranteed present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required_education: RequiredEducation,
    pub required_skills: Vec<String>,
    pub related_interests: Vec<String>,
    pub industries: Vec<String>,
    pub experience_range: ExperienceRange,
    pub suitable_work_styles: Vec<String>,
    pub salary_range: SalaryRange,
    pub top_companies: Vec<String>,
    pub demand: String,
    pub growth_rate: String,
}

impl From<Career> for RawCareer {
    fn from(career: Career) -> Self {
        RawCareer {
            id: Some(career.id),
            title: Some(career.title),
            category: Some(career.category),
            description: career.description,
            required_education: Some(career.required_education),
            required_skills: Some(career.required_skills),
            related_interests: Some(career.related_interests),
            industries: Some(career.industries),
            experience_range: Some(career.experience_range),
            suitable_work_styles: Some(career.suitable_work_styles),
            salary_range: Some(career.salary_range),
            top_companies: Some(career.top_companies),
            demand: Some(career.demand),
            growth_rate: Some(career.growth_rate),
        }
    }
}
