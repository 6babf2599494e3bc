use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::AdminAccount,
    ports::outgoing::{PasswordHasher, TokenProvider},
};

// ========================= Login Request =========================
/// Validated login request
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - guaranteed valid
    password: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    account: AdminAccount,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginAdminUseCase {
    pub fn new(
        account: AdminAccount,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            account,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        // The hash is checked even for an unknown email so both paths cost the same.
        let password_ok = self
            .password_hasher
            .verify_password(request.password(), self.account.password_hash())
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        let email_ok = request.email() == self.account.email();

        if !(email_ok && password_ok) {
            warn!(email = %request.email(), "Rejected admin login");
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(self.account.email())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(email = %self.account.email(), "Admin logged in");

        Ok(LoginAdminResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_provider.access_token_ttl(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{HashError, TokenClaims, TokenError};

    // Plain-text "hash" so tests do not pay for argon2
    struct PlainHasher {
        fail: bool,
    }

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("plain:{password}"))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            if self.fail {
                return Err(HashError::VerifyFailed);
            }
            Ok(hash == format!("plain:{password}"))
        }
    }

    struct FixedTokenProvider;

    impl TokenProvider for FixedTokenProvider {
        fn generate_access_token(&self, subject: &str) -> Result<String, TokenError> {
            Ok(format!("token-for-{subject}"))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("Not used in login tests")
        }

        fn access_token_ttl(&self) -> i64 {
            1800
        }
    }

    fn use_case(fail_hasher: bool) -> LoginAdminUseCase {
        LoginAdminUseCase::new(
            AdminAccount::new("admin@example.com", "plain:s3cret-pass").unwrap(),
            Arc::new(PlainHasher { fail: fail_hasher }),
            Arc::new(FixedTokenProvider),
        )
    }

    #[test]
    fn request_normalizes_email() {
        let req = LoginRequest::new(" Admin@Example.com ".into(), "pw".into()).unwrap();
        assert_eq!(req.email(), "admin@example.com");
    }

    #[test]
    fn request_rejects_blank_fields() {
        assert_eq!(
            LoginRequest::new("".into(), "pw".into()).unwrap_err(),
            LoginRequestError::EmptyEmail
        );
        assert_eq!(
            LoginRequest::new("nope".into(), "pw".into()).unwrap_err(),
            LoginRequestError::InvalidEmailFormat
        );
        assert_eq!(
            LoginRequest::new("a@b.com".into(), "  ".into()).unwrap_err(),
            LoginRequestError::EmptyPassword
        );
    }

    #[tokio::test]
    async fn login_success_issues_bearer_token() {
        let req = LoginRequest::new("ADMIN@example.com".into(), "s3cret-pass".into()).unwrap();

        let resp = use_case(false).execute(req).await.unwrap();

        assert_eq!(resp.access_token, "token-for-admin@example.com");
        assert_eq!(resp.token_type, "Bearer");
        assert_eq!(resp.expires_in, 1800);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let req = LoginRequest::new("admin@example.com".into(), "guess".into()).unwrap();

        let result = use_case(false).execute(req).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let req = LoginRequest::new("other@example.com".into(), "s3cret-pass".into()).unwrap();

        let result = use_case(false).execute(req).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn hasher_failure_is_reported() {
        let req = LoginRequest::new("admin@example.com".into(), "s3cret-pass".into()).unwrap();

        let result = use_case(true).execute(req).await;

        assert!(matches!(
            result,
            Err(LoginError::PasswordVerificationFailed(_))
        ));
    }
}
