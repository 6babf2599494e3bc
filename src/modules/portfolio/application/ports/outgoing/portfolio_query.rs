use async_trait::async_trait;

use crate::portfolio::application::domain::{
    Certificate, Education, Experience, FileRecord, FileType, Profile, Skill,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side shared by the public site and the dashboard. Every list comes
/// back in the order it is displayed in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// Oldest profile row, the only one ever consulted.
    async fn first_profile(&self) -> Result<Option<Profile>, PortfolioQueryError>;

    /// Ordered by category ascending.
    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError>;

    /// Ordered by start_date descending.
    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError>;

    /// Ordered by completion_date descending.
    async fn list_education(&self) -> Result<Vec<Education>, PortfolioQueryError>;

    /// Ordered by date_issued descending.
    async fn list_certificates(&self) -> Result<Vec<Certificate>, PortfolioQueryError>;

    /// Every file row, newest first.
    async fn list_files(&self) -> Result<Vec<FileRecord>, PortfolioQueryError>;

    /// Active file rows, newest first.
    async fn list_active_files(&self) -> Result<Vec<FileRecord>, PortfolioQueryError>;

    async fn latest_active_file(
        &self,
        file_type: FileType,
    ) -> Result<Option<FileRecord>, PortfolioQueryError>;
}
