use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::mutation_response::{map_draft_error, mutation_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::domain::{CertificateDraft, DraftError, MutationOutcome};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CertificateRequestDto {
    #[schema(example = "AWS Certified Developer")]
    #[serde(default)]
    pub name: String,

    #[schema(example = "Amazon Web Services")]
    #[serde(default)]
    pub issuer: String,

    #[schema(example = "Mar 2024")]
    pub date_issued: Option<String>,

    /// Link to the certificate document, if hosted
    #[schema(example = "https://example.com/certs/aws.pdf")]
    pub file_url: Option<String>,
}

impl CertificateRequestDto {
    fn into_draft(self) -> Result<CertificateDraft, DraftError> {
        CertificateDraft::new(self.name, self.issuer, self.date_issued, self.file_url)
    }
}

/// Add certificate
#[utoipa::path(
    post,
    path = "/api/admin/certificates",
    tag = "admin",
    request_body = CertificateRequestDto,
    responses(
        (status = 201, description = "Certificate added", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Missing name or issuer", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/certificates")]
pub async fn create_certificate_handler(
    session: AdminSession,
    req: web::Json<CertificateRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, certificate = %draft.name(), "Adding certificate");
    mutation_response(data.manage_certificates_use_case.create(draft).await, true)
}

/// Update certificate
#[utoipa::path(
    put,
    path = "/api/admin/certificates/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Certificate id")),
    request_body = CertificateRequestDto,
    responses(
        (status = 200, description = "Certificate updated", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/certificates/{id}")]
pub async fn update_certificate_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<CertificateRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return map_draft_error(e),
    };

    info!(subject = %session.subject, %id, "Updating certificate");
    mutation_response(data.manage_certificates_use_case.update(id, draft).await, false)
}

/// Delete certificate
#[utoipa::path(
    delete,
    path = "/api/admin/certificates/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Certificate id")),
    responses(
        (status = 200, description = "Certificate deleted", body = inline(SuccessResponse<MutationOutcome>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/certificates/{id}")]
pub async fn delete_certificate_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    info!(subject = %session.subject, %id, "Deleting certificate");
    mutation_response(data.manage_certificates_use_case.delete(id).await, false)
}
