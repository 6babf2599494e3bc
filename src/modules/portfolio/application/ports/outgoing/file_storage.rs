use async_trait::async_trait;

use crate::portfolio::application::domain::FileType;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("File storage is not configured")]
    NotConfigured,

    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

/// Object storage for uploaded CVs and profile pictures.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Stores the bytes and returns the public URL of the object.
    async fn upload(
        &self,
        file_type: FileType,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;
}
