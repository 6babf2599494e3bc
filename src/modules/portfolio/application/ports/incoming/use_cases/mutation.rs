use crate::portfolio::application::domain::MutationOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MutationError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("File upload feature requires storage bucket setup. Please contact administrator to configure storage.")]
    StorageNotConfigured,

    #[error("Upload failed: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// The write went through but the follow-up dashboard read did not.
    #[error("{message} Dashboard could not be reloaded: {reason}")]
    RefreshFailed { message: String, reason: String },
}

pub type MutationResult = Result<MutationOutcome, MutationError>;
