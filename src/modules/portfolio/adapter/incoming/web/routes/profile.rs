use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::mutation_response::{map_draft_error, mutation_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::domain::{MutationOutcome, ProfileDraft};
use crate::AppState;

/// Profile form. Omitted or blank fields are stored empty and the public
/// site shows its default text for them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileRequestDto {
    #[schema(example = "Jordan Lee")]
    pub name: Option<String>,
    #[schema(example = "Backend Engineer")]
    pub title: Option<String>,
    #[schema(example = "jordan@example.com")]
    pub email: Option<String>,
    #[schema(example = "+1 555 010 0300")]
    pub phone: Option<String>,
    #[schema(example = "Lisbon, Portugal")]
    pub location: Option<String>,
    pub bio: Option<String>,
}

/// Update profile
///
/// Overwrites the profile shown on the public site, creating it on first save.
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "admin",
    request_body = ProfileRequestDto,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<MutationOutcome>)),
        (
            status = 400,
            description = "Invalid email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Invalid email format" }
            })
        ),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 503, description = "Saved, but the dashboard could not be reloaded", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/profile")]
pub async fn update_profile_handler(
    session: AdminSession,
    req: web::Json<ProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let draft = match ProfileDraft::new(
        dto.name,
        dto.title,
        dto.email,
        dto.phone,
        dto.location,
        dto.bio,
    ) {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, "Updating profile");
    mutation_response(data.update_profile_use_case.execute(draft).await, false)
}
