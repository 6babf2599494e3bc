use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{
    latest_active, Certificate, Education, Experience, FileRecord, FileType, Profile, Skill,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActiveFiles {
    pub cv: Option<FileRecord>,
    pub profile_pic: Option<FileRecord>,
}

/// Everything the admin dashboard shows, re-read after every write.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSnapshot {
    pub profile: Option<Profile>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub files: Vec<FileRecord>,
    pub skill_categories: Vec<String>,
    pub active_files: ActiveFiles,
}

impl DashboardSnapshot {
    pub fn new(
        profile: Option<Profile>,
        skills: Vec<Skill>,
        experiences: Vec<Experience>,
        education: Vec<Education>,
        certificates: Vec<Certificate>,
        files: Vec<FileRecord>,
    ) -> Self {
        let skill_categories = distinct_categories(&skills);
        let active_files = ActiveFiles {
            cv: latest_active(&files, FileType::Cv).cloned(),
            profile_pic: latest_active(&files, FileType::ProfilePic).cloned(),
        };

        Self {
            profile,
            skills,
            experiences,
            education,
            certificates,
            files,
            skill_categories,
            active_files,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MutationOutcome {
    #[schema(example = "Skill added successfully!")]
    pub message: String,
    pub dashboard: DashboardSnapshot,
}

/// Non-blank categories in first-seen order.
pub fn distinct_categories(skills: &[Skill]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for skill in skills {
        let category = skill.category.trim();
        if !category.is_empty() && !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// Case-insensitive substring match; an empty query returns every category.
pub fn category_suggestions(categories: &[String], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    categories
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
