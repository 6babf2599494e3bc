use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::domain::DashboardSnapshot;
use crate::portfolio::application::ports::incoming::use_cases::DashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategorySuggestionQuery {
    /// Case-insensitive fragment; empty returns every category
    #[param(example = "back")]
    pub q: Option<String>,
}

fn map_dashboard_error(e: DashboardError) -> actix_web::HttpResponse {
    warn!(error = %e, "Dashboard unavailable");
    ApiResponse::service_unavailable("DASHBOARD_UNAVAILABLE", &e.to_string())
}

/// Admin dashboard
///
/// Profile, skills, experiences, education, certificates and files in one
/// snapshot, plus derived skill categories and the active CV and picture.
#[utoipa::path(
    get,
    path = "/admindashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Dashboard snapshot", body = inline(SuccessResponse<DashboardSnapshot>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (
            status = 503,
            description = "A table could not be loaded",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "DASHBOARD_UNAVAILABLE", "message": "Dashboard data could not be loaded: connection refused" }
            })
        ),
    ),
    security(("bearer_auth" = []))
)]
#[get("/admindashboard")]
pub async fn get_dashboard_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(subject = %session.subject, "Loading dashboard");

    match data.dashboard_use_case.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(e) => map_dashboard_error(e),
    }
}

/// Skill category suggestions
#[utoipa::path(
    get,
    path = "/api/admin/skills/categories",
    tag = "admin",
    params(CategorySuggestionQuery),
    responses(
        (status = 200, description = "Matching categories", body = inline(SuccessResponse<Vec<String>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 503, description = "Skills could not be loaded", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/skills/categories")]
pub async fn skill_categories_handler(
    _session: AdminSession,
    query: web::Query<CategorySuggestionQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner().q.unwrap_or_default();

    match data.dashboard_use_case.category_suggestions(&q).await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => map_dashboard_error(e),
    }
}
