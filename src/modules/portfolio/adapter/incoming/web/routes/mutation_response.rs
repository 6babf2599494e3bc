use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use crate::portfolio::application::domain::DraftError;
use crate::portfolio::application::ports::incoming::use_cases::{MutationError, MutationResult};
use crate::shared::api::ApiResponse;

/// 200 with the refreshed dashboard, or 201 for creations.
pub fn mutation_response(result: MutationResult, created: bool) -> HttpResponse {
    match result {
        Ok(outcome) if created => ApiResponse::created(outcome),
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => map_mutation_error(e),
    }
}

pub fn map_draft_error(e: DraftError) -> HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
}

pub fn map_mutation_error(e: MutationError) -> HttpResponse {
    match e {
        MutationError::NotFound(_) => ApiResponse::not_found("NOT_FOUND", &e.to_string()),
        MutationError::StorageNotConfigured => {
            ApiResponse::service_unavailable("STORAGE_NOT_CONFIGURED", &e.to_string())
        }
        MutationError::StorageFailed(ref msg) => {
            warn!(error = %msg, "Upload failed");
            ApiResponse::error(StatusCode::BAD_GATEWAY, "UPLOAD_FAILED", &e.to_string())
        }
        MutationError::RepositoryError(ref msg) => {
            error!(error = %msg, "Dashboard write failed");
            ApiResponse::internal_error()
        }
        MutationError::RefreshFailed { .. } => {
            ApiResponse::service_unavailable("DASHBOARD_UNAVAILABLE", &e.to_string())
        }
    }
}
