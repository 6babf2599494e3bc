use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::mutation_response::{map_draft_error, mutation_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::domain::{DraftError, ExperienceDraft, MutationOutcome};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExperienceRequestDto {
    #[schema(example = "Backend Engineer")]
    #[serde(default)]
    pub title: String,

    #[schema(example = "Acme Corp")]
    #[serde(default)]
    pub company: String,

    #[schema(example = "Remote")]
    pub location: Option<String>,

    #[schema(example = "Jan 2023")]
    pub start_date: Option<String>,

    #[schema(example = "Present")]
    pub end_date: Option<String>,

    /// One entry per bullet point; blank entries are dropped
    #[serde(default)]
    pub description: Vec<String>,
}

impl ExperienceRequestDto {
    fn into_draft(self) -> Result<ExperienceDraft, DraftError> {
        ExperienceDraft::new(
            self.title,
            self.company,
            self.location,
            self.start_date,
            self.end_date,
            self.description,
        )
    }
}

/// Add experience
#[utoipa::path(
    post,
    path = "/api/admin/experiences",
    tag = "admin",
    request_body = ExperienceRequestDto,
    responses(
        (status = 201, description = "Experience added", body = inline(SuccessResponse<MutationOutcome>)),
        (
            status = 400,
            description = "Missing title or company",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Company is required" }
            })
        ),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    session: AdminSession,
    req: web::Json<ExperienceRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, company = %draft.company(), "Adding experience");
    mutation_response(data.manage_experiences_use_case.create(draft).await, true)
}

/// Update experience
#[utoipa::path(
    put,
    path = "/api/admin/experiences/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Experience id")),
    request_body = ExperienceRequestDto,
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/experiences/{id}")]
pub async fn update_experience_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<ExperienceRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, %id, "Updating experience");
    mutation_response(data.manage_experiences_use_case.update(id, draft).await, false)
}

/// Delete experience
#[utoipa::path(
    delete,
    path = "/api/admin/experiences/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience deleted", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    info!(subject = %session.subject, %id, "Deleting experience");
    mutation_response(data.manage_experiences_use_case.delete(id).await, false)
}
