use async_trait::async_trait;
use tracing::warn;

use crate::portfolio::application::domain::FileType;
use crate::portfolio::application::ports::outgoing::{FileStorage, StorageError};

/// Storage adapter used while no bucket is provisioned. Every upload is
/// refused; files can still be registered by URL.
#[derive(Clone, Debug, Default)]
pub struct DisabledFileStorage;

#[async_trait]
impl FileStorage for DisabledFileStorage {
    async fn upload(
        &self,
        file_type: FileType,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        warn!(
            %file_type,
            file_name,
            size = bytes.len(),
            "Rejecting upload, storage bucket not configured"
        );
        Err(StorageError::NotConfigured)
    }
}
