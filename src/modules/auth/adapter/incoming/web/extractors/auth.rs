use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    TokenBlacklist, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::auth::application::services::hash_token;
use crate::shared::api::ApiResponse;

/// The signed-in administrator, resolved from a non-revoked bearer token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub subject: String,
    pub token: String,
    pub expires_at: i64,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .map(|data| data.get_ref().clone());
        let blacklist = req
            .app_data::<web::Data<Arc<dyn TokenBlacklist + Send + Sync>>>()
            .map(|data| data.get_ref().clone());
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let (Some(token_provider), Some(blacklist)) = (token_provider, blacklist) else {
                tracing::error!("Auth services are not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )));
            };

            let claims = token_provider.verify_token(&token).map_err(|e| {
                let message = match e {
                    TokenError::TokenExpired => "Session has expired",
                    _ => "Invalid or expired token",
                };
                create_api_error(ApiResponse::unauthorized("INVALID_TOKEN", message))
            })?;

            if claims.token_type != ACCESS_TOKEN_TYPE {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            match blacklist.is_revoked(&hash_token(&token)).await {
                Ok(false) => Ok(AdminSession {
                    subject: claims.sub,
                    token,
                    expires_at: claims.exp,
                }),
                Ok(true) => Err(create_api_error(ApiResponse::unauthorized(
                    "TOKEN_REVOKED",
                    "Session has been signed out",
                ))),
                Err(e) => {
                    tracing::error!("Revocation check failed: {}", e);
                    Err(create_api_error(ApiResponse::service_unavailable(
                        "REVOCATION_CHECK_FAILED",
                        "Unable to verify session, please try again later",
                    )))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
