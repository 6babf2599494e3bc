use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from the admin login form
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Admin password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: String,

    /// Token lifetime in seconds
    #[schema(example = 1800)]
    expires_in: i64,
}

/// Admin login
///
/// Checks the configured admin credentials and issues a bearer token for the dashboard.
#[utoipa::path(
    post,
    path = "/adminlogin",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 400,
            description = "Malformed email or empty password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Invalid email format" }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/adminlogin")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Admin login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(LoginResponse {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
        }),
        Err(e) => map_login_error(e),
    }
}

fn map_login_error(e: LoginError) -> actix_web::HttpResponse {
    match e {
        LoginError::InvalidCredentials => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::PasswordVerificationFailed(ref msg) => {
            error!(error = %msg, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenGenerationFailed(ref msg) => {
            error!(error = %msg, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::login_admin::{
        ILoginAdminUseCase, LoginAdminResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockLogin(Result<LoginAdminResponse, LoginError>);

    #[async_trait]
    impl ILoginAdminUseCase for MockLogin {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
            self.0.clone()
        }
    }

    fn success() -> MockLogin {
        MockLogin(Ok(LoginAdminResponse {
            access_token: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.access".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 1800,
        }))
    }

    async fn post_login(
        uc: MockLogin,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default().with_login_admin(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/adminlogin")
            .set_json(&body)
            .to_request();

        test::call_service(&app, req).await
    }

    fn credentials() -> serde_json::Value {
        serde_json::json!({ "email": "admin@example.com", "password": "SecurePass123!" })
    }

    #[actix_web::test]
    async fn test_login_success() {
        let resp = post_login(success(), credentials()).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["access_token"].is_string());
        assert_eq!(body["data"]["token_type"], "Bearer");
        assert_eq!(body["data"]["expires_in"], 1800);
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let resp = post_login(MockLogin(Err(LoginError::InvalidCredentials)), credentials()).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_login_malformed_email_is_validation_error() {
        let resp = post_login(
            success(),
            serde_json::json!({ "email": "not-an-email", "password": "x" }),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Invalid email format");
    }

    #[actix_web::test]
    async fn test_login_hasher_failure_is_internal_error() {
        let resp = post_login(
            MockLogin(Err(LoginError::PasswordVerificationFailed(
                "bad hash".to_string(),
            ))),
            credentials(),
        )
        .await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
