use actix_web::{delete, post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::mutation_response::{map_draft_error, mutation_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::domain::{FileRegistration, FileType, MutationOutcome};
use crate::portfolio::application::ports::incoming::use_cases::FileUpload;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterFileDto {
    pub file_type: FileType,

    #[schema(example = "Jordan_Lee_CV.pdf")]
    #[serde(default)]
    pub file_name: String,

    /// Where the file is already hosted
    #[schema(example = "https://cdn.example.com/cv.pdf")]
    #[serde(default)]
    pub file_url: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadFileQuery {
    /// `cv` or `profile_pic`
    pub file_type: FileType,
    #[param(example = "Jordan_Lee_CV.pdf")]
    pub file_name: String,
}

/// Register file
///
/// Makes an already hosted file the active CV or profile picture. The
/// previously active file of that type stays listed but is deactivated.
#[utoipa::path(
    post,
    path = "/api/admin/files",
    tag = "admin",
    request_body = RegisterFileDto,
    responses(
        (status = 201, description = "File registered", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Missing file name or URL", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/files")]
pub async fn register_file_handler(
    session: AdminSession,
    req: web::Json<RegisterFileDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let registration = match FileRegistration::new(dto.file_type, dto.file_name, dto.file_url) {
        Ok(registration) => registration,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, file_type = %registration.file_type(), "Registering file");
    mutation_response(data.manage_files_use_case.register(registration).await, true)
}

/// Upload file
///
/// Raw file bytes in the body. Answers 503 `STORAGE_NOT_CONFIGURED` until a
/// storage bucket is set up.
#[utoipa::path(
    post,
    path = "/api/admin/files/upload",
    tag = "admin",
    params(UploadFileQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "File uploaded", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Empty file or file name", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (
            status = 503,
            description = "No storage configured",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "STORAGE_NOT_CONFIGURED",
                    "message": "File upload feature requires storage bucket setup. Please contact administrator to configure storage."
                }
            })
        ),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/files/upload")]
pub async fn upload_file_handler(
    session: AdminSession,
    query: web::Query<UploadFileQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let file_name = query.file_name.trim().to_string();

    if file_name.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "File name is required");
    }
    if body.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "File is empty");
    }

    info!(
        subject = %session.subject,
        file_type = %query.file_type,
        size = body.len(),
        "Uploading file"
    );

    let upload = FileUpload {
        file_type: query.file_type,
        file_name,
        bytes: body.to_vec(),
    };
    mutation_response(data.manage_files_use_case.upload(upload).await, true)
}

/// Delete file
///
/// Deactivates the file. The row stays in the file list.
#[utoipa::path(
    delete,
    path = "/api/admin/files/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "File id")),
    responses(
        (status = 200, description = "File deactivated", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/files/{id}")]
pub async fn delete_file_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    info!(subject = %session.subject, %id, "Deactivating file");
    mutation_response(data.manage_files_use_case.deactivate(id).await, false)
}
