use async_trait::async_trait;

use super::mutation::MutationResult;
use crate::portfolio::application::domain::ProfileDraft;

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, draft: ProfileDraft) -> MutationResult;
}
