use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody,
};

// Portfolio
use crate::portfolio::adapter::incoming::web::routes::{
    CertificateRequestDto, EducationRequestDto, ExperienceRequestDto, ProfileRequestDto,
    RegisterFileDto, SkillRequestDto,
};
use crate::portfolio::application::domain::sections::{
    AboutSection, CvLink, ExperienceItem, ExperienceSection, FooterSection, HeaderSection,
    HeroSection, NavItem, PortfolioPage, SkillsSection, Source,
};
use crate::portfolio::application::domain::{
    ActiveFiles, Certificate, DashboardSnapshot, Education, Experience, FileRecord, FileType,
    MutationOutcome, Profile, Skill,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio sections and the admin dashboard that edits them",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public site
        crate::portfolio::adapter::incoming::web::routes::portfolio_page_handler,
        crate::portfolio::adapter::incoming::web::routes::public_header_handler,
        crate::portfolio::adapter::incoming::web::routes::public_hero_handler,
        crate::portfolio::adapter::incoming::web::routes::public_about_handler,
        crate::portfolio::adapter::incoming::web::routes::public_skills_handler,
        crate::portfolio::adapter::incoming::web::routes::public_experiences_handler,
        crate::portfolio::adapter::incoming::web::routes::public_cv_handler,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::admin_redirect_handler,
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,

        // Dashboard
        crate::portfolio::adapter::incoming::web::routes::get_dashboard_handler,
        crate::portfolio::adapter::incoming::web::routes::skill_categories_handler,
        crate::portfolio::adapter::incoming::web::routes::update_profile_handler,
        crate::portfolio::adapter::incoming::web::routes::create_skill_handler,
        crate::portfolio::adapter::incoming::web::routes::update_skill_handler,
        crate::portfolio::adapter::incoming::web::routes::delete_skill_handler,
        crate::portfolio::adapter::incoming::web::routes::create_experience_handler,
        crate::portfolio::adapter::incoming::web::routes::update_experience_handler,
        crate::portfolio::adapter::incoming::web::routes::delete_experience_handler,
        crate::portfolio::adapter::incoming::web::routes::create_education_handler,
        crate::portfolio::adapter::incoming::web::routes::update_education_handler,
        crate::portfolio::adapter::incoming::web::routes::delete_education_handler,
        crate::portfolio::adapter::incoming::web::routes::create_certificate_handler,
        crate::portfolio::adapter::incoming::web::routes::update_certificate_handler,
        crate::portfolio::adapter::incoming::web::routes::delete_certificate_handler,
        crate::portfolio::adapter::incoming::web::routes::register_file_handler,
        crate::portfolio::adapter::incoming::web::routes::upload_file_handler,
        crate::portfolio::adapter::incoming::web::routes::delete_file_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<MutationOutcome>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody,

            // Public sections
            PortfolioPage,
            HeaderSection,
            NavItem,
            HeroSection,
            CvLink,
            AboutSection,
            SkillsSection,
            ExperienceSection,
            ExperienceItem,
            FooterSection,
            Source,

            // Dashboard
            DashboardSnapshot,
            ActiveFiles,
            MutationOutcome,
            Profile,
            Skill,
            Experience,
            Education,
            Certificate,
            FileRecord,
            FileType,
            ProfileRequestDto,
            SkillRequestDto,
            ExperienceRequestDto,
            EducationRequestDto,
            CertificateRequestDto,
            RegisterFileDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "public", description = "Public portfolio sections"),
        (name = "auth", description = "Admin sign in and sign out"),
        (name = "admin", description = "Dashboard reads and edits"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /adminlogin"))
                        .build(),
                ),
            )
        }
    }
}
