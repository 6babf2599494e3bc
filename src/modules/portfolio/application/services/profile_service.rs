use async_trait::async_trait;
use tracing::info;

use super::dashboard_service::respond_with_dashboard;
use super::record_service::map_repository_error;
use crate::portfolio::application::{
    domain::ProfileDraft,
    ports::{
        incoming::use_cases::{MutationResult, UpdateProfileUseCase},
        outgoing::{PortfolioQuery, ProfileRepository},
    },
};

#[derive(Clone)]
pub struct ProfileService<R, Q>
where
    R: ProfileRepository,
    Q: PortfolioQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> ProfileService<R, Q>
where
    R: ProfileRepository,
    Q: PortfolioQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateProfileUseCase for ProfileService<R, Q>
where
    R: ProfileRepository,
    Q: PortfolioQuery,
{
    async fn execute(&self, draft: ProfileDraft) -> MutationResult {
        let profile = self
            .repository
            .upsert_first(draft)
            .await
            .map_err(|e| map_repository_error("Profile", e))?;

        info!(profile_id = %profile.id, "Profile updated");
        respond_with_dashboard(&self.query, "Profile updated successfully!".to_string()).await
    }
}
