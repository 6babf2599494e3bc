use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{Certificate, Education, Experience, Profile, Skill};
use super::fallback::{
    CertificateContent, ContactContent, EducationContent, FallbackContent, Highlight,
    ProjectsContent, SkillCategoryContent, SkillContent,
};

pub const NAVIGATION: [&str; 6] = ["Home", "About", "Skills", "Experience", "Projects", "Contact"];

/// Where a section's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Live,
    Fallback,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavItem {
    pub label: String,
    /// In-page anchor, e.g. `#about`
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CvLink {
    pub url: String,
    pub download_name: String,
    pub source: Source,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeaderSection {
    pub brand: String,
    pub navigation: Vec<NavItem>,
    pub cv: CvLink,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeroSection {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub profile_image_url: String,
    pub cv: CvLink,
    pub mailto_link: String,
    pub tel_link: String,
    pub source: Source,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AboutSection {
    pub bio: String,
    pub summary: String,
    /// First five skill names
    pub top_skills: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub education: Vec<EducationContent>,
    pub certificates: Vec<CertificateContent>,
    pub source: Source,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillsSection {
    pub categories: Vec<SkillCategoryContent>,
    pub source: Source,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// `"{start_date} - {end_date}"`
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExperienceSection {
    pub items: Vec<ExperienceItem>,
    pub source: Source,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FooterSection {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub mailto_link: String,
    pub tel_link: String,
    pub address: Vec<String>,
    pub languages: Vec<String>,
    pub copyright: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioPage {
    pub header: HeaderSection,
    pub hero: HeroSection,
    pub about: AboutSection,
    pub skills: SkillsSection,
    pub experience: ExperienceSection,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
    pub footer: FooterSection,
}

pub fn cv_download_name(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_CV.pdf", joined)
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

pub fn tel_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// `cv_url` is the latest active CV, `None` when missing or not loadable.
pub fn build_cv_link(cv_url: Option<&str>, name: &str, content: &FallbackContent) -> CvLink {
    let (url, source) = match cv_url {
        Some(url) => (url.to_string(), Source::Live),
        None => (content.identity.cv_url.clone(), Source::Fallback),
    };

    CvLink {
        url,
        download_name: cv_download_name(name),
        source,
    }
}

pub fn build_header(cv_url: Option<&str>, content: &FallbackContent) -> HeaderSection {
    HeaderSection {
        brand: content.identity.name.clone(),
        navigation: NAVIGATION
            .iter()
            .map(|label| NavItem {
                label: label.to_string(),
                anchor: format!("#{}", label.to_lowercase()),
            })
            .collect(),
        cv: build_cv_link(cv_url, &content.identity.name, content),
    }
}

pub fn build_hero(
    profile: Option<&Profile>,
    profile_image_url: Option<&str>,
    cv_url: Option<&str>,
    content: &FallbackContent,
) -> HeroSection {
    let identity = &content.identity;

    let name = or_fallback(profile.map(|p| p.name.as_str()), &identity.name);
    let email = or_fallback(profile.map(|p| p.email.as_str()), &identity.email);
    let phone = or_fallback(profile.map(|p| p.phone.as_str()), &identity.phone);

    HeroSection {
        title: or_fallback(profile.map(|p| p.title.as_str()), &identity.title),
        bio: or_fallback(profile.map(|p| p.bio.as_str()), &identity.bio),
        location: or_fallback(profile.map(|p| p.location.as_str()), &identity.location),
        profile_image_url: or_fallback(profile_image_url, &identity.profile_image_url),
        cv: build_cv_link(cv_url, &name, content),
        mailto_link: mailto_link(&email),
        tel_link: tel_link(&phone),
        source: if profile.is_some() {
            Source::Live
        } else {
            Source::Fallback
        },
        name,
        email,
        phone,
    }
}

/// Rows backing the About lists, present only when every query succeeded.
pub struct AboutRows {
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
}

pub fn build_about(
    profile: Option<&Profile>,
    rows: Option<AboutRows>,
    content: &FallbackContent,
) -> AboutSection {
    let about = &content.about;
    let bio = or_fallback(profile.map(|p| p.bio.as_str()), &about.bio);

    let (top_skills, education, certificates, source) = match rows {
        Some(rows) => (
            rows.skills.into_iter().take(5).map(|s| s.name).collect(),
            rows.education
                .into_iter()
                .map(|e| EducationContent {
                    degree: e.degree,
                    institution: e.institution,
                    score: e.score,
                    completion_date: e.completion_date,
                })
                .collect(),
            rows.certificates
                .into_iter()
                .map(|c| CertificateContent {
                    name: c.name,
                    issuer: c.issuer,
                    date_issued: c.date_issued,
                    file_url: c.file_url,
                })
                .collect(),
            Source::Live,
        ),
        None => (
            about.skills.iter().take(5).cloned().collect(),
            about.education.clone(),
            about.certificates.clone(),
            Source::Fallback,
        ),
    };

    AboutSection {
        bio,
        summary: about.summary.clone(),
        top_skills,
        highlights: about.highlights.clone(),
        education,
        certificates,
        source,
    }
}

/// Groups skills by category, keeping the order in which categories first appear.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillCategoryContent> {
    let mut categories: Vec<SkillCategoryContent> = Vec::new();

    for skill in skills {
        let item = SkillContent {
            name: skill.name.clone(),
            level: skill.level,
        };

        match categories.iter_mut().find(|c| c.title == skill.category) {
            Some(category) => category.skills.push(item),
            None => categories.push(SkillCategoryContent {
                title: skill.category.clone(),
                skills: vec![item],
            }),
        }
    }

    categories
}

pub fn build_skills(skills: Option<&[Skill]>, content: &FallbackContent) -> SkillsSection {
    match skills {
        Some(skills) => SkillsSection {
            categories: group_skills(skills),
            source: Source::Live,
        },
        None => SkillsSection {
            categories: content.skills.clone(),
            source: Source::Fallback,
        },
    }
}

fn period(start_date: &str, end_date: &str) -> String {
    format!("{} - {}", start_date, end_date)
}

pub fn build_experiences(
    experiences: Option<Vec<Experience>>,
    content: &FallbackContent,
) -> ExperienceSection {
    match experiences {
        Some(rows) => ExperienceSection {
            items: rows
                .into_iter()
                .map(|e| ExperienceItem {
                    period: period(&e.start_date, &e.end_date),
                    title: e.title,
                    company: e.company,
                    location: e.location,
                    start_date: e.start_date,
                    end_date: e.end_date,
                    description: e.description,
                })
                .collect(),
            source: Source::Live,
        },
        None => ExperienceSection {
            items: content
                .experiences
                .iter()
                .map(|e| ExperienceItem {
                    title: e.title.clone(),
                    company: e.company.clone(),
                    location: e.location.clone(),
                    start_date: e.start_date.clone(),
                    end_date: e.end_date.clone(),
                    period: period(&e.start_date, &e.end_date),
                    description: e.description.clone(),
                })
                .collect(),
            source: Source::Fallback,
        },
    }
}

pub fn build_footer(content: &FallbackContent) -> FooterSection {
    let contact = &content.contact;

    FooterSection {
        name: content.identity.name.clone(),
        tagline: content.footer.tagline.clone(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        mailto_link: mailto_link(&contact.email),
        tel_link: tel_link(&contact.phone),
        address: contact.address.clone(),
        languages: contact.languages.clone(),
        copyright: content.footer.copyright.clone(),
        description: content.footer.description.clone(),
    }
}
