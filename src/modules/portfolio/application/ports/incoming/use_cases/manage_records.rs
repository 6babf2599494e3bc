use async_trait::async_trait;
use uuid::Uuid;

use super::mutation::MutationResult;
use crate::portfolio::application::domain::RecordDraft;

/// Add, edit and delete for skills, experiences, education and certificates.
#[async_trait]
pub trait ManageRecordsUseCase<D: RecordDraft>: Send + Sync {
    async fn create(&self, draft: D) -> MutationResult;

    async fn update(&self, id: Uuid, draft: D) -> MutationResult;

    async fn delete(&self, id: Uuid) -> MutationResult;
}
