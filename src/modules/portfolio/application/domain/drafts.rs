//! Validated inputs for every dashboard write. A draft can only be built
//! through its constructor, so repositories never see blank required fields.

use email_address::EmailAddress;
use serde::Serialize;

use super::entities::{Certificate, Education, Experience, FileType, Skill};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Skill level must be between 0 and 100, got {0}")]
    LevelOutOfRange(i32),

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Pairs a draft with the record it produces once stored.
pub trait RecordDraft: Clone + Send + Sync + 'static {
    type Record: Clone + Send + Sync + Serialize + 'static;

    /// Capitalized record name used in messages ("Skill added successfully!").
    const LABEL: &'static str;
}

fn required(field: &'static str, value: String) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

// ========================= Profile =========================
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    name: String,
    title: String,
    email: String,
    phone: String,
    location: String,
    bio: String,
}

impl ProfileDraft {
    /// Every field may be blank; the public site falls back per field.
    pub fn new(
        name: Option<String>,
        title: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        location: Option<String>,
        bio: Option<String>,
    ) -> Result<Self, DraftError> {
        let email = optional(email);
        if !email.is_empty() && !EmailAddress::is_valid(&email) {
            return Err(DraftError::InvalidEmail);
        }

        Ok(Self {
            name: optional(name),
            title: optional(title),
            email,
            phone: optional(phone),
            location: optional(location),
            bio: optional(bio),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }
}

// ========================= Skill =========================
#[derive(Debug, Clone, PartialEq)]
pub struct SkillDraft {
    category: String,
    name: String,
    level: i32,
}

impl SkillDraft {
    pub fn new(category: String, name: String, level: i32) -> Result<Self, DraftError> {
        let name = required("Skill name", name)?;
        let category = required("Skill category", category)?;

        if !(0..=100).contains(&level) {
            return Err(DraftError::LevelOutOfRange(level));
        }

        Ok(Self {
            category,
            name,
            level,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl RecordDraft for SkillDraft {
    type Record = Skill;
    const LABEL: &'static str = "Skill";
}

// ========================= Experience =========================
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceDraft {
    title: String,
    company: String,
    location: String,
    start_date: String,
    end_date: String,
    description: Vec<String>,
}

impl ExperienceDraft {
    pub fn new(
        title: String,
        company: String,
        location: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        description: Vec<String>,
    ) -> Result<Self, DraftError> {
        let title = required("Job title", title)?;
        let company = required("Company", company)?;

        // One entry per bullet point; blank lines from the textarea are dropped.
        let description = description
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(Self {
            title,
            company,
            location: optional(location),
            start_date: optional(start_date),
            end_date: optional(end_date),
            description,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }
}

impl RecordDraft for ExperienceDraft {
    type Record = Experience;
    const LABEL: &'static str = "Experience";
}

// ========================= Education =========================
#[derive(Debug, Clone, PartialEq)]
pub struct EducationDraft {
    degree: String,
    institution: String,
    score: String,
    completion_date: String,
}

impl EducationDraft {
    pub fn new(
        degree: String,
        institution: String,
        score: Option<String>,
        completion_date: Option<String>,
    ) -> Result<Self, DraftError> {
        Ok(Self {
            degree: required("Degree", degree)?,
            institution: required("Institution", institution)?,
            score: optional(score),
            completion_date: optional(completion_date),
        })
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn score(&self) -> &str {
        &self.score
    }

    pub fn completion_date(&self) -> &str {
        &self.completion_date
    }
}

impl RecordDraft for EducationDraft {
    type Record = Education;
    const LABEL: &'static str = "Education";
}

// ========================= Certificate =========================
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateDraft {
    name: String,
    issuer: String,
    date_issued: String,
    file_url: Option<String>,
}

impl CertificateDraft {
    pub fn new(
        name: String,
        issuer: String,
        date_issued: Option<String>,
        file_url: Option<String>,
    ) -> Result<Self, DraftError> {
        Ok(Self {
            name: required("Certificate name", name)?,
            issuer: required("Issuer", issuer)?,
            date_issued: optional(date_issued),
            file_url: file_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn date_issued(&self) -> &str {
        &self.date_issued
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }
}

impl RecordDraft for CertificateDraft {
    type Record = Certificate;
    const LABEL: &'static str = "Certificate";
}

// ========================= Files =========================
#[derive(Debug, Clone, PartialEq)]
pub struct FileRegistration {
    file_type: FileType,
    file_name: String,
    file_url: String,
}

impl FileRegistration {
    pub fn new(file_type: FileType, file_name: String, file_url: String) -> Result<Self, DraftError> {
        Ok(Self {
            file_type,
            file_name: required("File name", file_name)?,
            file_url: required("File URL", file_url)?,
        })
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_requires_name_and_category() {
        assert_eq!(
            SkillDraft::new("Backend".into(), "  ".into(), 50),
            Err(DraftError::MissingField("Skill name"))
        );
        assert_eq!(
            SkillDraft::new("".into(), "Rust".into(), 50),
            Err(DraftError::MissingField("Skill category"))
        );
    }

    #[test]
    fn skill_level_bounds_are_inclusive() {
        assert!(SkillDraft::new("A".into(), "B".into(), 0).is_ok());
        assert!(SkillDraft::new("A".into(), "B".into(), 100).is_ok());
        assert_eq!(
            SkillDraft::new("A".into(), "B".into(), 101),
            Err(DraftError::LevelOutOfRange(101))
        );
        assert_eq!(
            SkillDraft::new("A".into(), "B".into(), -1),
            Err(DraftError::LevelOutOfRange(-1))
        );
    }

    #[test]
    fn skill_fields_are_trimmed() {
        let draft = SkillDraft::new(" Backend ".into(), " Rust ".into(), 80).unwrap();
        assert_eq!(draft.category(), "Backend");
        assert_eq!(draft.name(), "Rust");
    }

    #[test]
    fn experience_drops_blank_description_lines() {
        let draft = ExperienceDraft::new(
            "Engineer".into(),
            "Acme".into(),
            None,
            Some("Nov 2022".into()),
            Some("Present".into()),
            vec![
                "  Built things ".into(),
                "".into(),
                "   ".into(),
                "Shipped them".into(),
            ],
        )
        .unwrap();

        assert_eq!(draft.description(), ["Built things", "Shipped them"]);
        assert_eq!(draft.location(), "");
    }

    #[test]
    fn experience_requires_title_and_company() {
        let err = ExperienceDraft::new("".into(), "Acme".into(), None, None, None, vec![]);
        assert_eq!(err, Err(DraftError::MissingField("Job title")));

        let err = ExperienceDraft::new("Engineer".into(), " ".into(), None, None, None, vec![]);
        assert_eq!(err, Err(DraftError::MissingField("Company")));
    }

    #[test]
    fn education_and_certificate_required_fields() {
        assert_eq!(
            EducationDraft::new("".into(), "Uni".into(), None, None),
            Err(DraftError::MissingField("Degree"))
        );
        assert_eq!(
            CertificateDraft::new("Cert".into(), "".into(), None, None),
            Err(DraftError::MissingField("Issuer"))
        );
    }

    #[test]
    fn certificate_blank_file_url_becomes_none() {
        let draft =
            CertificateDraft::new("Cert".into(), "Board".into(), None, Some("  ".into())).unwrap();
        assert_eq!(draft.file_url(), None);
    }

    #[test]
    fn profile_accepts_blank_email_but_rejects_malformed() {
        assert!(ProfileDraft::new(None, None, Some("".into()), None, None, None).is_ok());
        assert_eq!(
            ProfileDraft::new(None, None, Some("nope".into()), None, None, None),
            Err(DraftError::InvalidEmail)
        );
    }

    #[test]
    fn file_registration_requires_url() {
        assert_eq!(
            FileRegistration::new(FileType::Cv, "cv.pdf".into(), "".into()),
            Err(DraftError::MissingField("File URL"))
        );
    }
}
