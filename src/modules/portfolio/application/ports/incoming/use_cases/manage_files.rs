use async_trait::async_trait;
use uuid::Uuid;

use super::mutation::MutationResult;
use crate::portfolio::application::domain::{FileRegistration, FileType};

#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_type: FileType,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait ManageFilesUseCase: Send + Sync {
    /// Makes an already hosted file the active one of its type.
    async fn register(&self, registration: FileRegistration) -> MutationResult;

    /// Stores the bytes, then registers the resulting URL.
    async fn upload(&self, upload: FileUpload) -> MutationResult;

    async fn deactivate(&self, id: Uuid) -> MutationResult;
}
