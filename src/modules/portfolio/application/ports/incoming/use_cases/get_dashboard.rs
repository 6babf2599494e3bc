use async_trait::async_trait;

use crate::portfolio::application::domain::DashboardSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error("Dashboard data could not be loaded: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardSnapshot, DashboardError>;

    /// Existing skill categories containing `query`, ignoring case.
    async fn category_suggestions(&self, query: &str) -> Result<Vec<String>, DashboardError>;
}
