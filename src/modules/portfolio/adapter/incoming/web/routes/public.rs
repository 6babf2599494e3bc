use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::portfolio::application::domain::sections::{
    AboutSection, CvLink, ExperienceSection, HeaderSection, HeroSection, PortfolioPage,
    SkillsSection,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full public portfolio
///
/// Every section of the public site in one document. Sections whose rows
/// cannot be loaded carry `source: fallback`; this endpoint never fails.
#[utoipa::path(
    get,
    path = "/",
    tag = "public",
    responses(
        (status = 200, description = "Portfolio page", body = inline(SuccessResponse<PortfolioPage>)),
    )
)]
#[get("/")]
pub async fn portfolio_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.public_portfolio_use_case.page().await)
}

/// Header with navigation and CV download link
#[utoipa::path(
    get,
    path = "/api/public/header",
    tag = "public",
    responses(
        (status = 200, description = "Header section", body = inline(SuccessResponse<HeaderSection>)),
    )
)]
#[get("/api/public/header")]
pub async fn public_header_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.public_portfolio_use_case.header().await)
}

/// Hero section
#[utoipa::path(
    get,
    path = "/api/public/hero",
    tag = "public",
    responses(
        (status = 200, description = "Hero section", body = inline(SuccessResponse<HeroSection>)),
    )
)]
#[get("/api/public/hero")]
pub async fn public_hero_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.public_portfolio_use_case.hero().await)
}

/// About section
#[utoipa::path(
    get,
    path = "/api/public/about",
    tag = "public",
    responses(
        (status = 200, description = "About section", body = inline(SuccessResponse<AboutSection>)),
    )
)]
#[get("/api/public/about")]
pub async fn public_about_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.public_portfolio_use_case.about().await)
}

/// Skills grouped by category
#[utoipa::path(
    get,
    path = "/api/public/skills",
    tag = "public",
    responses(
        (status = 200, description = "Skills section", body = inline(SuccessResponse<SkillsSection>)),
    )
)]
#[get("/api/public/skills")]
pub async fn public_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.public_portfolio_use_case.skills().await)
}

/// Experience timeline, newest first
#[utoipa::path(
    get,
    path = "/api/public/experiences",
    tag = "public",
    responses(
        (status = 200, description = "Experience section", body = inline(SuccessResponse<ExperienceSection>)),
    )
)]
#[get("/api/public/experiences")]
pub async fn public_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.public_portfolio_use_case.experiences().await)
}

/// Latest active CV
#[utoipa::path(
    get,
    path = "/api/public/cv",
    tag = "public",
    responses(
        (status = 200, description = "CV link", body = inline(SuccessResponse<CvLink>)),
    )
)]
#[get("/api/public/cv")]
pub async fn public_cv_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.public_portfolio_use_case.latest_cv().await)
}
