//! Backfills absent career fields from title and category keywords.
//!
//! Purely additive: a field present on the raw record is never overwritten,
//! so enriching an already-complete record is a no-op.

use tracing::debug;

use crate::errors::CatalogError;
use crate::models::career::{Career, ExperienceRange, RawCareer, SalaryRange, MAX_TOP_COMPANIES};

const TECH_COMPANIES: &[&str] = &[
    "Google", "Microsoft", "Amazon", "Meta", "Apple", "Netflix", "Tesla", "Uber",
];
const FINANCE_COMPANIES: &[&str] = &["Goldman Sachs", "JP Morgan", "Morgan Stanley", "BlackRock"];
const CONSULTING_COMPANIES: &[&str] = &["McKinsey", "BCG", "Bain", "Deloitte", "Accenture"];

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    ("software", &["Technology & Software", "E-commerce & Retail"]),
    (
        "data",
        &["Technology & Software", "Finance & Banking", "Healthcare & Biotech"],
    ),
    ("ai", &["Technology & Software", "Healthcare & Biotech"]),
    ("design", &["Technology & Software", "Media & Entertainment"]),
    ("business", &["Finance & Banking", "Consulting"]),
    ("marketing", &["E-commerce & Retail", "Media & Entertainment"]),
    ("finance", &["Finance & Banking"]),
    ("healthcare", &["Healthcare & Biotech"]),
];

/// Turns a raw catalog record into a fully populated `Career`.
/// `index` is the record's position in the source, used for error labels.
pub fn enrich_career(raw: RawCareer, index: usize) -> Result<Career, CatalogError> {
    let id = raw
        .id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(CatalogError::MissingIdentifier { index })?;

    let title = raw
        .title
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| CatalogError::MissingTitle { id: id.clone() })?;
    let category = raw.category.unwrap_or_default();

    let title_lc = title.to_lowercase();
    let category_lc = category.to_lowercase();

    let experience_range = raw.experience_range.unwrap_or_else(|| {
        debug!(career = %id, "inferring experience range");
        infer_experience_range(&title_lc)
    });
    if experience_range.min > experience_range.max {
        return Err(CatalogError::InvalidExperienceRange {
            id,
            min: experience_range.min,
            max: experience_range.max,
        });
    }

    let suitable_work_styles = raw.suitable_work_styles.unwrap_or_else(|| {
        debug!(career = %id, "inferring work styles");
        infer_work_styles(&title_lc)
    });
    let industries = raw.industries.unwrap_or_else(|| {
        debug!(career = %id, "inferring industries");
        infer_industries(&title_lc, &category_lc)
    });
    let salary_range = raw.salary_range.unwrap_or_else(|| {
        debug!(career = %id, "inferring salary range");
        infer_salary_range(&title_lc, &category_lc)
    });
    let top_companies = raw.top_companies.unwrap_or_else(|| {
        debug!(career = %id, "inferring top companies");
        default_companies(&category_lc)
    });

    Ok(Career {
        id,
        title,
        category,
        description: raw.description,
        required_education: raw.required_education.unwrap_or_default(),
        required_skills: raw.required_skills.unwrap_or_default(),
        related_interests: raw.related_interests.unwrap_or_default(),
        industries,
        experience_range,
        suitable_work_styles,
        salary_range,
        top_companies,
        demand: raw.demand.unwrap_or_else(|| "Medium".to_string()),
        growth_rate: raw.growth_rate.unwrap_or_else(|| "Moderate".to_string()),
    })
}

fn has_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn infer_experience_range(title: &str) -> ExperienceRange {
    if has_any(title, &["junior", "entry", "intern", "trainee", "associate"]) {
        ExperienceRange { min: 0, max: 2 }
    } else if has_any(title, &["senior", "lead", "principal", "architect", "director"]) {
        ExperienceRange { min: 5, max: 15 }
    } else if has_any(title, &["manager", "head", "chief"]) {
        ExperienceRange { min: 7, max: 20 }
    } else {
        ExperienceRange { min: 2, max: 5 }
    }
}

pub fn infer_work_styles(title: &str) -> Vec<String> {
    let mut styles = Vec::new();
    if has_any(title, &["manager", "lead", "director", "head", "chief"]) {
        styles.push("leadership".to_string());
    }
    if has_any(title, &["developer", "engineer", "designer", "analyst"]) {
        styles.push("collaborative".to_string());
    }
    if has_any(title, &["researcher", "writer", "consultant", "specialist"]) {
        styles.push("independent".to_string());
    }
    if styles.is_empty() {
        styles = owned(&["collaborative", "independent"]);
    }
    styles
}

pub fn infer_industries(title: &str, category: &str) -> Vec<String> {
    let mut industries: Vec<String> = Vec::new();
    for (keyword, mapped) in INDUSTRY_KEYWORDS {
        if category.contains(keyword) || title.contains(keyword) {
            for industry in *mapped {
                if !industries.iter().any(|i| i == industry) {
                    industries.push(industry.to_string());
                }
            }
        }
    }
    if industries.is_empty() {
        industries.push("Technology & Software".to_string());
    }
    industries
}

pub fn infer_salary_range(title: &str, category: &str) -> SalaryRange {
    let (mut min, mut max) = if has_any(title, &["junior", "entry", "intern"]) {
        (40_000, 70_000)
    } else if has_any(title, &["senior", "lead", "principal"]) {
        (100_000, 180_000)
    } else if has_any(title, &["manager", "director", "head"]) {
        (120_000, 250_000)
    } else {
        (60_000, 120_000)
    };

    if has_any(category, &["ai", "machine learning", "data science"]) {
        min = (f64::from(min) * 1.2) as u32;
        max = (f64::from(max) * 1.3) as u32;
    }

    SalaryRange {
        min,
        max,
        currency: "USD".to_string(),
    }
}

pub fn default_companies(category: &str) -> Vec<String> {
    let companies: Vec<&str> = if has_any(category, &["software", "ai", "data"]) {
        TECH_COMPANIES.to_vec()
    } else if has_any(category, &["finance", "business"]) {
        FINANCE_COMPANIES
            .iter()
            .chain(&TECH_COMPANIES[..4])
            .copied()
            .collect()
    } else if category.contains("consulting") {
        CONSULTING_COMPANIES
            .iter()
            .chain(&TECH_COMPANIES[..3])
            .copied()
            .collect()
    } else {
        TECH_COMPANIES.to_vec()
    };
    companies.into_iter().take(MAX_TOP_COMPANIES).map(String::from).collect()
}
