use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::mutation_response::{map_draft_error, mutation_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::domain::{DraftError, EducationDraft, MutationOutcome};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EducationRequestDto {
    #[schema(example = "BSc Computer Science")]
    #[serde(default)]
    pub degree: String,

    #[schema(example = "State University")]
    #[serde(default)]
    pub institution: String,

    /// Grade or GPA as displayed
    #[schema(example = "3.8 GPA")]
    pub score: Option<String>,

    #[schema(example = "2019")]
    pub completion_date: Option<String>,
}

impl EducationRequestDto {
    fn into_draft(self) -> Result<EducationDraft, DraftError> {
        EducationDraft::new(
            self.degree,
            self.institution,
            self.score,
            self.completion_date,
        )
    }
}

/// Add education
#[utoipa::path(
    post,
    path = "/api/admin/education",
    tag = "admin",
    request_body = EducationRequestDto,
    responses(
        (status = 201, description = "Education added", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Missing degree or institution", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/education")]
pub async fn create_education_handler(
    session: AdminSession,
    req: web::Json<EducationRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, "Adding education");
    mutation_response(data.manage_education_use_case.create(draft).await, true)
}

/// Update education
#[utoipa::path(
    put,
    path = "/api/admin/education/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Education id")),
    request_body = EducationRequestDto,
    responses(
        (status = 200, description = "Education updated", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Education not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/education/{id}")]
pub async fn update_education_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<EducationRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, %id, "Updating education");
    mutation_response(data.manage_education_use_case.update(id, draft).await, false)
}

/// Delete education
#[utoipa::path(
    delete,
    path = "/api/admin/education/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Education id")),
    responses(
        (status = 200, description = "Education deleted", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Education not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    info!(subject = %session.subject, %id, "Deleting education");
    mutation_response(data.manage_education_use_case.delete(id).await, false)
}
