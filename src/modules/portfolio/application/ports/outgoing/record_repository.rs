use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::domain::{
    FileRecord, FileRegistration, Profile, ProfileDraft, RecordDraft,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Insert, replace and delete for one table, keyed by the draft type.
#[async_trait]
pub trait RecordRepository<D: RecordDraft>: Send + Sync {
    async fn insert(&self, draft: D) -> Result<D::Record, RepositoryError>;

    async fn update(&self, id: Uuid, draft: D) -> Result<D::Record, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Updates the first profile row, inserting one when the table is empty.
    async fn upsert_first(&self, draft: ProfileDraft) -> Result<Profile, RepositoryError>;
}

#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Deactivates every active row of the same type and inserts the new
    /// one as active, atomically.
    async fn register(&self, registration: FileRegistration)
        -> Result<FileRecord, RepositoryError>;

    /// Clears `is_active`; the row itself is kept.
    async fn deactivate(&self, id: Uuid) -> Result<FileRecord, RepositoryError>;
}
