use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::application::{ports::outgoing::TokenBlacklist, services::hash_token};

pub const LOGIN_ROUTE: &str = "/adminlogin";

// ========================= Logout Command =========================
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub token: String,
    /// Unix timestamp at which the token stops being valid on its own.
    pub expires_at: i64,
}

// ====================== Logout Response =============================
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
    pub redirect_to: String,
    /// False when the revocation store could not record the token.
    pub token_revoked: bool,
}

// ============================ Logout Use Case =============================
/// Logout never fails from the caller's point of view: the client drops its
/// session and goes back to the login route either way.
#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    async fn execute(&self, command: LogoutCommand) -> LogoutResponse;
}

#[derive(Clone)]
pub struct LogoutAdminUseCase {
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutAdminUseCase {
    pub fn new(blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { blacklist }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, command: LogoutCommand) -> LogoutResponse {
        let remaining = (command.expires_at - chrono::Utc::now().timestamp()).max(1) as u64;
        let token_hash = hash_token(&command.token);

        let token_revoked = match self.blacklist.revoke(&token_hash, remaining).await {
            Ok(()) => {
                info!(ttl_seconds = remaining, "Admin session revoked");
                true
            }
            Err(e) => {
                warn!("Failed to revoke admin session: {}", e);
                false
            }
        };

        LogoutResponse {
            message: "Logged out successfully".to_string(),
            redirect_to: LOGIN_ROUTE.to_string(),
            token_revoked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenBlacklistError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBlacklist {
        revoked: Mutex<Vec<(String, u64)>>,
        fail: bool,
    }

    #[async_trait]
    impl TokenBlacklist for RecordingBlacklist {
        async fn revoke(&self, token_hash: &str, ttl_seconds: u64) -> Result<(), TokenBlacklistError> {
            if self.fail {
                return Err(TokenBlacklistError::Unavailable("connection refused".into()));
            }
            self.revoked
                .lock()
                .unwrap()
                .push((token_hash.to_string(), ttl_seconds));
            Ok(())
        }

        async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
            Ok(self
                .revoked
                .lock()
                .unwrap()
                .iter()
                .any(|(hash, _)| hash == token_hash))
        }
    }

    #[tokio::test]
    async fn logout_revokes_hashed_token_for_remaining_lifetime() {
        let blacklist = Arc::new(RecordingBlacklist::default());
        let use_case = LogoutAdminUseCase::new(blacklist.clone());
        let expires_at = chrono::Utc::now().timestamp() + 600;

        let resp = use_case
            .execute(LogoutCommand {
                token: "raw-token".into(),
                expires_at,
            })
            .await;

        assert!(resp.token_revoked);
        assert_eq!(resp.redirect_to, "/adminlogin");

        let revoked = blacklist.revoked.lock().unwrap();
        assert_eq!(revoked.len(), 1);
        assert_eq!(revoked[0].0, hash_token("raw-token"));
        assert!(revoked[0].1 > 590 && revoked[0].1 <= 600);
    }

    #[tokio::test]
    async fn logout_of_already_expired_token_uses_minimum_ttl() {
        let blacklist = Arc::new(RecordingBlacklist::default());
        let use_case = LogoutAdminUseCase::new(blacklist.clone());

        use_case
            .execute(LogoutCommand {
                token: "old".into(),
                expires_at: 0,
            })
            .await;

        assert_eq!(blacklist.revoked.lock().unwrap()[0].1, 1);
    }

    #[tokio::test]
    async fn logout_still_redirects_when_store_is_down() {
        let blacklist = Arc::new(RecordingBlacklist {
            fail: true,
            ..Default::default()
        });
        let use_case = LogoutAdminUseCase::new(blacklist);

        let resp = use_case
            .execute(LogoutCommand {
                token: "raw-token".into(),
                expires_at: chrono::Utc::now().timestamp() + 60,
            })
            .await;

        assert!(!resp.token_revoked);
        assert_eq!(resp.redirect_to, "/adminlogin");
        assert_eq!(resp.message, "Logged out successfully");
    }
}
