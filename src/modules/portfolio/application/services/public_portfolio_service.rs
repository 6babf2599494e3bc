use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::portfolio::application::{
    domain::{
        entities::latest_active,
        sections::{
            build_about, build_cv_link, build_experiences, build_footer, build_header, build_hero,
            build_skills, AboutRows, AboutSection, CvLink, ExperienceSection, HeaderSection,
            HeroSection, PortfolioPage, SkillsSection,
        },
        FallbackContent, FileType, Profile,
    },
    ports::{
        incoming::use_cases::GetPublicPortfolioUseCase,
        outgoing::{PortfolioQuery, PortfolioQueryError},
    },
};

/// Keeps the rows of a successful query, logs and drops a failed one.
fn loaded<T>(section: &'static str, result: Result<T, PortfolioQueryError>) -> Option<T> {
    match result {
        Ok(rows) => Some(rows),
        Err(e) => {
            warn!(section, error = %e, "Query failed, rendering fallback content");
            None
        }
    }
}

#[derive(Clone)]
pub struct PublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
    content: Arc<FallbackContent>,
}

impl<Q> PublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q, content: Arc<FallbackContent>) -> Self {
        Self { query, content }
    }

    async fn latest_cv_url(&self) -> Option<String> {
        loaded("cv", self.query.latest_active_file(FileType::Cv).await)
            .flatten()
            .map(|file| file.file_url)
    }

    async fn profile(&self) -> Option<Profile> {
        loaded("profile", self.query.first_profile().await).flatten()
    }
}

#[async_trait]
impl<Q> GetPublicPortfolioUseCase for PublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    async fn page(&self) -> PortfolioPage {
        let (header, hero, about, skills, experience) = futures::join!(
            self.header(),
            self.hero(),
            self.about(),
            self.skills(),
            self.experiences()
        );

        PortfolioPage {
            header,
            hero,
            about,
            skills,
            experience,
            projects: self.content.projects.clone(),
            contact: self.content.contact.clone(),
            footer: build_footer(&self.content),
        }
    }

    async fn header(&self) -> HeaderSection {
        build_header(self.latest_cv_url().await.as_deref(), &self.content)
    }

    async fn hero(&self) -> HeroSection {
        let (profile, files) = futures::join!(self.profile(), self.query.list_active_files());
        let files = loaded("hero files", files).unwrap_or_default();

        build_hero(
            profile.as_ref(),
            latest_active(&files, FileType::ProfilePic).map(|f| f.file_url.as_str()),
            latest_active(&files, FileType::Cv).map(|f| f.file_url.as_str()),
            &self.content,
        )
    }

    async fn about(&self) -> AboutSection {
        let (profile, skills, education, certificates) = futures::join!(
            self.query.first_profile(),
            self.query.list_skills(),
            self.query.list_education(),
            self.query.list_certificates()
        );

        let rows = match (&profile, skills, education, certificates) {
            (Ok(_), Ok(skills), Ok(education), Ok(certificates)) => Some(AboutRows {
                skills,
                education,
                certificates,
            }),
            (profile, skills, education, certificates) => {
                let reason = [
                    profile.as_ref().err(),
                    skills.as_ref().err(),
                    education.as_ref().err(),
                    certificates.as_ref().err(),
                ]
                .into_iter()
                .flatten()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
                warn!(section = "about", error = %reason, "Query failed, rendering fallback content");
                None
            }
        };

        let profile = profile.ok().flatten();
        build_about(profile.as_ref(), rows, &self.content)
    }

    async fn skills(&self) -> SkillsSection {
        let skills = loaded("skills", self.query.list_skills().await);
        build_skills(skills.as_deref(), &self.content)
    }

    async fn experiences(&self) -> ExperienceSection {
        let experiences = loaded("experience", self.query.list_experiences().await);
        build_experiences(experiences, &self.content)
    }

    async fn latest_cv(&self) -> CvLink {
        let (profile, cv_url) = futures::join!(self.profile(), self.latest_cv_url());

        let name = profile
            .map(|p| p.name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.content.identity.name.clone());

        build_cv_link(cv_url.as_deref(), &name, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::sections::Source;
    use crate::portfolio::application::ports::outgoing::MockPortfolioQuery;
    use crate::tests::support::portfolio_fixtures::{
        cv_file, fallback_content, profile, query_error, skill,
    };

    fn service(query: MockPortfolioQuery) -> PublicPortfolioService<MockPortfolioQuery> {
        PublicPortfolioService::new(query, fallback_content())
    }

    fn unreachable_database() -> MockPortfolioQuery {
        let mut query = MockPortfolioQuery::new();
        query.expect_first_profile().returning(|| Err(query_error()));
        query.expect_list_skills().returning(|| Err(query_error()));
        query.expect_list_experiences().returning(|| Err(query_error()));
        query.expect_list_education().returning(|| Err(query_error()));
        query.expect_list_certificates().returning(|| Err(query_error()));
        query.expect_list_files().returning(|| Err(query_error()));
        query.expect_list_active_files().returning(|| Err(query_error()));
        query
            .expect_latest_active_file()
            .returning(|_| Err(query_error()));
        query
    }

    #[tokio::test]
    async fn page_renders_entirely_from_fallback_when_database_is_down() {
        let content = fallback_content();

        let page = service(unreachable_database()).page().await;

        assert_eq!(page.hero.source, Source::Fallback);
        assert_eq!(page.hero.name, content.identity.name);
        assert_eq!(page.about.source, Source::Fallback);
        assert_eq!(page.skills.source, Source::Fallback);
        assert_eq!(page.skills.categories, content.skills);
        assert_eq!(page.experience.source, Source::Fallback);
        assert_eq!(page.header.cv.url, content.identity.cv_url);
        assert_eq!(page.projects, content.projects);
        assert_eq!(page.contact, content.contact);
    }

    #[tokio::test]
    async fn hero_uses_latest_active_files() {
        let mut query = MockPortfolioQuery::new();
        query
            .expect_first_profile()
            .returning(|| Ok(Some(profile("Jordan Lee"))));
        query.expect_list_active_files().returning(|| {
            Ok(vec![
                cv_file("/files/new-cv.pdf", true),
                cv_file("/files/old-cv.pdf", true),
            ])
        });

        let hero = service(query).hero().await;

        assert_eq!(hero.source, Source::Live);
        assert_eq!(hero.cv.url, "/files/new-cv.pdf");
        assert_eq!(hero.cv.download_name, "Jordan_Lee_CV.pdf");
        // No active profile picture
        assert_eq!(
            hero.profile_image_url,
            fallback_content().identity.profile_image_url
        );
    }

    #[tokio::test]
    async fn about_falls_back_when_one_list_fails() {
        let mut query = MockPortfolioQuery::new();
        query
            .expect_first_profile()
            .returning(|| Ok(Some(profile("Jordan Lee"))));
        query
            .expect_list_skills()
            .returning(|| Ok(vec![skill("Backend", "Rust")]));
        query.expect_list_education().returning(|| Err(query_error()));
        query.expect_list_certificates().returning(|| Ok(vec![]));

        let about = service(query).about().await;

        assert_eq!(about.source, Source::Fallback);
        assert_eq!(about.top_skills, fallback_content().about.skills);
    }

    #[tokio::test]
    async fn empty_skill_table_is_not_a_failure() {
        let mut query = MockPortfolioQuery::new();
        query.expect_list_skills().returning(|| Ok(vec![]));

        let skills = service(query).skills().await;

        assert_eq!(skills.source, Source::Live);
        assert!(skills.categories.is_empty());
    }

    #[tokio::test]
    async fn latest_cv_prefers_database_row() {
        let mut query = MockPortfolioQuery::new();
        query.expect_first_profile().returning(|| Ok(None));
        query
            .expect_latest_active_file()
            .withf(|file_type| *file_type == FileType::Cv)
            .returning(|_| Ok(Some(cv_file("/files/cv-2025.pdf", true))));

        let cv = service(query).latest_cv().await;

        assert_eq!(cv.url, "/files/cv-2025.pdf");
        assert_eq!(cv.source, Source::Live);
        assert_eq!(
            cv.download_name,
            format!(
                "{}_CV.pdf",
                fallback_content().identity.name.replace(' ', "_")
            )
        );
    }
}
