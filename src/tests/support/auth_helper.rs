use actix_web::web;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::{
    TokenBlacklist, TokenBlacklistError, TokenClaims, TokenProvider,
};

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

fn test_jwt_config(access_token_expiry: i64) -> JwtConfig {
    JwtConfig {
        issuer: "portfolio".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        access_token_expiry,
    }
}

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config(3600))
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

pub fn blacklist_data(
    blacklist: Arc<InMemoryBlacklist>,
) -> web::Data<Arc<dyn TokenBlacklist + Send + Sync>> {
    let blacklist: Arc<dyn TokenBlacklist + Send + Sync> = blacklist;
    web::Data::new(blacklist)
}

/// `Authorization` header value for a fresh admin session.
pub fn admin_bearer() -> String {
    let token = create_test_jwt_service()
        .generate_access_token(TEST_ADMIN_EMAIL)
        .expect("test token");
    format!("Bearer {}", token)
}

/// Correctly signed and unexpired, but carrying a `token_type` other than access.
pub fn bearer_with_token_type(token_type: &str) -> String {
    let config = test_jwt_config(3600);
    let now = chrono::Utc::now().timestamp();
    let claims = TokenClaims {
        sub: TEST_ADMIN_EMAIL.to_string(),
        exp: now + 3600,
        iat: now,
        nbf: now,
        iss: config.issuer.clone(),
        jti: uuid::Uuid::new_v4(),
        token_type: token_type.to_string(),
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(config.secret_key.as_bytes()),
    )
    .expect("test token");
    format!("Bearer {}", token)
}

/// Signed with the test secret but two minutes past expiry.
pub fn expired_bearer() -> String {
    let token = JwtTokenService::new(test_jwt_config(-120))
        .generate_access_token(TEST_ADMIN_EMAIL)
        .expect("test token");
    format!("Bearer {}", token)
}

#[derive(Default)]
pub struct InMemoryBlacklist {
    revoked: Mutex<HashSet<String>>,
    unavailable: bool,
}

impl InMemoryBlacklist {
    pub fn unavailable() -> Self {
        Self {
            revoked: Mutex::new(HashSet::new()),
            unavailable: true,
        }
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryBlacklist {
    async fn revoke(&self, token_hash: &str, _ttl_seconds: u64) -> Result<(), TokenBlacklistError> {
        if self.unavailable {
            return Err(TokenBlacklistError::Unavailable("connection refused".into()));
        }
        self.revoked.lock().unwrap().insert(token_hash.to_string());
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
        if self.unavailable {
            return Err(TokenBlacklistError::Unavailable("connection refused".into()));
        }
        Ok(self.revoked.lock().unwrap().contains(token_hash))
    }
}
