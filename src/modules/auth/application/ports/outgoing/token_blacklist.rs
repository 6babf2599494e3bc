use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenBlacklistError {
    #[error("Revocation store unavailable: {0}")]
    Unavailable(String),
}

/// Revoked access tokens, keyed by token hash, kept until they would expire anyway.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn revoke(&self, token_hash: &str, ttl_seconds: u64) -> Result<(), TokenBlacklistError>;
    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenBlacklistError>;
}
