use async_trait::async_trait;

use crate::portfolio::application::domain::sections::{
    AboutSection, CvLink, ExperienceSection, HeaderSection, HeroSection, PortfolioPage,
    SkillsSection,
};

/// Public read side. Nothing here fails: a section whose rows cannot be
/// loaded is rendered from the fallback content instead.
#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    async fn page(&self) -> PortfolioPage;

    async fn header(&self) -> HeaderSection;

    async fn hero(&self) -> HeroSection;

    async fn about(&self) -> AboutSection;

    async fn skills(&self) -> SkillsSection;

    async fn experiences(&self) -> ExperienceSection;

    async fn latest_cv(&self) -> CvLink;
}
