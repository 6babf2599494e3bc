use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::mutation_response::{map_draft_error, mutation_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::domain::{DraftError, MutationOutcome, SkillDraft};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SkillRequestDto {
    /// Free-text grouping label
    #[schema(example = "Backend")]
    #[serde(default)]
    pub category: String,

    #[schema(example = "Rust")]
    #[serde(default)]
    pub name: String,

    /// Proficiency between 0 and 100
    #[schema(example = 85, minimum = 0, maximum = 100)]
    #[serde(default)]
    pub level: i32,
}

impl SkillRequestDto {
    fn into_draft(self) -> Result<SkillDraft, DraftError> {
        SkillDraft::new(self.category, self.name, self.level)
    }
}

/// Add skill
#[utoipa::path(
    post,
    path = "/api/admin/skills",
    tag = "admin",
    request_body = SkillRequestDto,
    responses(
        (status = 201, description = "Skill added", body = inline(SuccessResponse<MutationOutcome>)),
        (
            status = 400,
            description = "Missing name or category, or level outside 0-100",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Skill name is required" }
            })
        ),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    session: AdminSession,
    req: web::Json<SkillRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, skill = %draft.name(), "Adding skill");
    mutation_response(data.manage_skills_use_case.create(draft).await, true)
}

/// Update skill
#[utoipa::path(
    put,
    path = "/api/admin/skills/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Skill id")),
    request_body = SkillRequestDto,
    responses(
        (status = 200, description = "Skill updated", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/skills/{id}")]
pub async fn update_skill_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<SkillRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, %id, "Updating skill");
    mutation_response(data.manage_skills_use_case.update(id, draft).await, false)
}

/// Delete skill
#[utoipa::path(
    delete,
    path = "/api/admin/skills/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Skill id")),
    responses(
        (status = 200, description = "Skill deleted", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    info!(subject = %session.subject, %id, "Deleting skill");
    mutation_response(data.manage_skills_use_case.delete(id).await, false)
}
