use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenBlacklistError};

const KEY_PREFIX: &str = "revoked_token";

#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key(token_hash: &str) -> String {
        format!("{}:{}", KEY_PREFIX, token_hash)
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn revoke(&self, token_hash: &str, ttl_seconds: u64) -> Result<(), TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::Unavailable(format!("Redis pool error: {}", e)))?;

        let _: () = conn
            .set_ex(Self::key(token_hash), "1", ttl_seconds.max(1))
            .await
            .map_err(|e| {
                TokenBlacklistError::Unavailable(format!("Failed to revoke token: {}", e))
            })?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::Unavailable(format!("Redis pool error: {}", e)))?;

        conn.exists(Self::key(token_hash)).await.map_err(|e| {
            TokenBlacklistError::Unavailable(format!("Failed to check token status: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deadpool_redis::{Config, Runtime};

    fn unreachable_pool() -> Arc<Pool> {
        // Nothing listens on 6399 in the test environment
        let pool = Config::from_url("redis://127.0.0.1:6399")
            .create_pool(Some(Runtime::Tokio1))
            .expect("pool config is valid");
        Arc::new(pool)
    }

    #[test]
    fn test_key_is_namespaced() {
        assert_eq!(RedisTokenBlacklist::key("abc"), "revoked_token:abc");
    }

    #[tokio::test]
    async fn test_revoke_reports_unavailable_store() {
        let blacklist = RedisTokenBlacklist::new(unreachable_pool());

        let result = blacklist.revoke("abc", 60).await;

        assert!(matches!(result, Err(TokenBlacklistError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_is_revoked_reports_unavailable_store() {
        let blacklist = RedisTokenBlacklist::new(unreachable_pool());

        let result = blacklist.is_revoked("abc").await;

        assert!(matches!(result, Err(TokenBlacklistError::Unavailable(_))));
    }
}
