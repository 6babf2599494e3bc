use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::dashboard_service::respond_with_dashboard;
use super::record_service::map_repository_error;
use crate::portfolio::application::{
    domain::FileRegistration,
    ports::{
        incoming::use_cases::{FileUpload, ManageFilesUseCase, MutationError, MutationResult},
        outgoing::{FileRepository, FileStorage, PortfolioQuery, StorageError},
    },
};

#[derive(Clone)]
pub struct FileService<R, S, Q>
where
    R: FileRepository,
    S: FileStorage,
    Q: PortfolioQuery,
{
    repository: R,
    storage: S,
    query: Q,
}

impl<R, S, Q> FileService<R, S, Q>
where
    R: FileRepository,
    S: FileStorage,
    Q: PortfolioQuery,
{
    pub fn new(repository: R, storage: S, query: Q) -> Self {
        Self {
            repository,
            storage,
            query,
        }
    }
}

#[async_trait]
impl<R, S, Q> ManageFilesUseCase for FileService<R, S, Q>
where
    R: FileRepository,
    S: FileStorage,
    Q: PortfolioQuery,
{
    async fn register(&self, registration: FileRegistration) -> MutationResult {
        let file = self
            .repository
            .register(registration)
            .await
            .map_err(|e| map_repository_error("File", e))?;

        info!(file_id = %file.id, file_type = %file.file_type, "Active file replaced");
        respond_with_dashboard(
            &self.query,
            format!("{} uploaded successfully!", file.file_type.label()),
        )
        .await
    }

    async fn upload(&self, upload: FileUpload) -> MutationResult {
        let url = self
            .storage
            .upload(upload.file_type, &upload.file_name, upload.bytes)
            .await
            .map_err(|e| match e {
                StorageError::NotConfigured => {
                    warn!(file_type = %upload.file_type, "Upload attempted without storage");
                    MutationError::StorageNotConfigured
                }
                StorageError::UploadFailed(msg) => {
                    error!(error = %msg, "Upload failed");
                    MutationError::StorageFailed(msg)
                }
            })?;

        let registration = FileRegistration::new(upload.file_type, upload.file_name, url)
            .map_err(|e| MutationError::StorageFailed(e.to_string()))?;

        self.register(registration).await
    }

    async fn deactivate(&self, id: Uuid) -> MutationResult {
        let file = self
            .repository
            .deactivate(id)
            .await
            .map_err(|e| map_repository_error("File", e))?;

        info!(file_id = %id, file_type = %file.file_type, "File deactivated");
        respond_with_dashboard(
            &self.query,
            format!("{} deleted successfully!", file.file_type.label()),
        )
        .await
    }
}
