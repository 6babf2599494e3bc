use serde::{Deserialize, Serialize};
use std::path::Path;
use utoipa::ToSchema;

const EMBEDDED_CONTENT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/fallback.toml"
));

#[derive(Debug, thiserror::Error)]
pub enum FallbackContentError {
    #[error("Failed to read fallback content: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse fallback content: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Literal content for the public site: substitutes for rows that could not
/// be loaded, plus the sections that never come from the database.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackContent {
    pub identity: Identity,
    pub about: AboutContent,
    pub skills: Vec<SkillCategoryContent>,
    pub experiences: Vec<ExperienceContent>,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub profile_image_url: String,
    pub cv_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutContent {
    pub bio: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub education: Vec<EducationContent>,
    pub certificates: Vec<CertificateContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EducationContent {
    pub degree: String,
    pub institution: String,
    pub score: String,
    pub completion_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CertificateContent {
    pub name: String,
    pub issuer: String,
    pub date_issued: String,
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillCategoryContent {
    pub title: String,
    pub skills: Vec<SkillContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillContent {
    pub name: String,
    pub level: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceContent {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectsContent {
    pub heading: String,
    pub subtitle: String,
    pub summary: String,
    pub items: Vec<ProjectContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectContent {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactContent {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub address: Vec<String>,
    pub languages: Vec<String>,
    pub whatsapp_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub copyright: String,
    pub description: String,
}

impl FallbackContent {
    pub fn from_toml_str(raw: &str) -> Result<Self, FallbackContentError> {
        Ok(toml::from_str(raw)?)
    }

    /// Content compiled into the binary from `content/fallback.toml`.
    pub fn embedded() -> Result<Self, FallbackContentError> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    /// Reads `path` when given, otherwise uses the embedded content.
    pub fn load(path: Option<&Path>) -> Result<Self, FallbackContentError> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                tracing::info!(path = %path.display(), "Loaded fallback content override");
                Self::from_toml_str(&raw)
            }
            None => Self::embedded(),
        }
    }
}
