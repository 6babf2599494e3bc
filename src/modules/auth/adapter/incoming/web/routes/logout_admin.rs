use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::auth::application::use_cases::logout_admin::LogoutCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,

    /// Where the client should navigate next
    #[schema(example = "/adminlogin")]
    redirect_to: String,

    /// False when the session could not be recorded as revoked
    #[schema(example = true)]
    token_revoked: bool,
}

/// Admin logout
///
/// Revokes the current bearer token. The client should drop its session and go back to the login page.
#[utoipa::path(
    post,
    path = "/adminlogout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/adminlogout")]
pub async fn logout_admin_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(subject = %session.subject, "Admin logout");

    let response = data
        .logout_admin_use_case
        .execute(LogoutCommand {
            token: session.token,
            expires_at: session.expires_at,
        })
        .await;

    ApiResponse::success(LogoutResponseBody {
        message: response.message,
        redirect_to: response.redirect_to,
        token_revoked: response.token_revoked,
    })
}
