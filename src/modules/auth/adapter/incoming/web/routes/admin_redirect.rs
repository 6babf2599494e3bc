use crate::auth::application::use_cases::logout_admin::LOGIN_ROUTE;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

/// Admin entry point
///
/// Sends the browser to the login page.
#[utoipa::path(
    get,
    path = "/admin",
    tag = "auth",
    responses(
        (status = 308, description = "Redirect to the login page", headers(("Location" = String)))
    )
)]
#[get("/admin")]
pub async fn admin_redirect_handler() -> impl Responder {
    ApiResponse::redirect(LOGIN_ROUTE)
}
