//! Built-in catalog used when no catalog file is configured.

use crate::models::career::{ExperienceRange, RawCareer, RequiredEducation, SalaryRange};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct Seed<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    description: &'a str,
    education: (&'a str, &'a [&'a str]),
    skills: &'a [&'a str],
    interests: &'a [&'a str],
    industries: &'a [&'a str],
    experience: (u32, u32),
    work_styles: &'a [&'a str],
    salary: (u32, u32),
    companies: &'a [&'a str],
    demand: &'a str,
    growth_rate: &'a str,
}

impl From<Seed<'_>> for RawCareer {
    fn from(seed: Seed<'_>) -> Self {
        RawCareer {
            id: Some(seed.id.to_string()),
            title: Some(seed.title.to_string()),
            category: Some(seed.category.to_string()),
            description: Some(seed.description.to_string()),
            required_education: Some(RequiredEducation {
                level: seed.education.0.to_string(),
                fields: strings(seed.education.1),
            }),
            required_skills: Some(strings(seed.skills)),
            related_interests: Some(strings(seed.interests)),
            industries: Some(strings(seed.industries)),
            experience_range: Some(ExperienceRange {
                min: seed.experience.0,
                max: seed.experience.1,
            }),
            suitable_work_styles: Some(strings(seed.work_styles)),
            salary_range: Some(SalaryRange {
                min: seed.salary.0,
                max: seed.salary.1,
                currency: "USD".to_string(),
            }),
            top_companies: Some(strings(seed.companies)),
            demand: Some(seed.demand.to_string()),
            growth_rate: Some(seed.growth_rate.to_string()),
        }
    }
}

pub fn builtin_careers() -> Vec<RawCareer> {
    vec![
        Seed {
            id: "1",
            title: "Full Stack Developer",
            category: "Software Development",
            description: "Build end-to-end web applications",
            education: ("Undergraduate", &["Computer Science", "Engineering"]),
            skills: &["React", "Node.js", "SQL", "Git", "REST APIs"],
            interests: &["Coding", "Building Things", "Problem Solving"],
            industries: &["Technology & Software", "E-commerce & Retail"],
            experience: (0, 3),
            work_styles: &["collaborative", "independent"],
            salary: (60_000, 120_000),
            companies: &[
                "Google", "Microsoft", "Amazon", "Meta", "Netflix", "Shopify", "Stripe", "Airbnb",
            ],
            demand: "High",
            growth_rate: "Fast",
        }
        .into(),
        Seed {
            id: "2",
            title: "Data Scientist",
            category: "Data Science & AI",
            description: "Extract insights from data using ML",
            education: ("Postgraduate", &["Computer Science", "Statistics", "Mathematics"]),
            skills: &["Python", "Machine Learning", "Statistics", "SQL", "Data Visualization"],
            interests: &["Data Analysis", "Math & Statistics", "Research"],
            industries: &["Technology & Software", "Finance & Banking", "Healthcare & Biotech"],
            experience: (1, 5),
            work_styles: &["independent", "collaborative"],
            salary: (80_000, 150_000),
            companies: &[
                "Google", "Meta", "Amazon", "Netflix", "Uber", "Airbnb", "Microsoft", "Apple",
            ],
            demand: "Very High",
            growth_rate: "Very Fast",
        }
        .into(),
        Seed {
            id: "3",
            title: "UX Designer",
            category: "Design",
            description: "Design user-centered digital experiences",
            education: ("Undergraduate", &["Design", "Arts & Humanities", "Computer Science"]),
            skills: &["Figma", "User Research", "Prototyping", "UI Design", "Wireframing"],
            interests: &["Design & Art", "User Empathy", "Creativity"],
            industries: &["Technology & Software", "Media & Entertainment"],
            experience: (0, 4),
            work_styles: &["collaborative", "independent"],
            salary: (55_000, 110_000),
            companies: &[
                "Apple", "Google", "Meta", "Adobe", "Airbnb", "Uber", "Netflix", "Microsoft",
            ],
            demand: "High",
            growth_rate: "Fast",
        }
        .into(),
    ]
}
