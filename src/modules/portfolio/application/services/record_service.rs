use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::{error, info};
use uuid::Uuid;

use super::dashboard_service::respond_with_dashboard;
use crate::portfolio::application::{
    domain::RecordDraft,
    ports::{
        incoming::use_cases::{ManageRecordsUseCase, MutationError, MutationResult},
        outgoing::{PortfolioQuery, RecordRepository, RepositoryError},
    },
};

pub(super) fn map_repository_error(label: &'static str, error: RepositoryError) -> MutationError {
    match error {
        RepositoryError::NotFound => MutationError::NotFound(label),
        RepositoryError::DatabaseError(msg) => {
            error!(record = label, error = %msg, "Write failed");
            MutationError::RepositoryError(msg)
        }
    }
}

/// One service per record kind, e.g. `ManageRecordsService<SkillDraft, _, _>`.
pub struct ManageRecordsService<D, R, Q>
where
    D: RecordDraft,
    R: RecordRepository<D>,
    Q: PortfolioQuery,
{
    repository: R,
    query: Q,
    _draft: PhantomData<fn() -> D>,
}

impl<D, R, Q> ManageRecordsService<D, R, Q>
where
    D: RecordDraft,
    R: RecordRepository<D>,
    Q: PortfolioQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self {
            repository,
            query,
            _draft: PhantomData,
        }
    }
}

#[async_trait]
impl<D, R, Q> ManageRecordsUseCase<D> for ManageRecordsService<D, R, Q>
where
    D: RecordDraft,
    R: RecordRepository<D>,
    Q: PortfolioQuery,
{
    async fn create(&self, draft: D) -> MutationResult {
        self.repository
            .insert(draft)
            .await
            .map_err(|e| map_repository_error(D::LABEL, e))?;

        info!(record = D::LABEL, "Record added");
        respond_with_dashboard(&self.query, format!("{} added successfully!", D::LABEL)).await
    }

    async fn update(&self, id: Uuid, draft: D) -> MutationResult {
        self.repository
            .update(id, draft)
            .await
            .map_err(|e| map_repository_error(D::LABEL, e))?;

        info!(record = D::LABEL, %id, "Record updated");
        respond_with_dashboard(&self.query, format!("{} updated successfully!", D::LABEL)).await
    }

    async fn delete(&self, id: Uuid) -> MutationResult {
        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repository_error(D::LABEL, e))?;

        info!(record = D::LABEL, %id, "Record deleted");
        respond_with_dashboard(&self.query, format!("{} deleted successfully!", D::LABEL)).await
    }
}
