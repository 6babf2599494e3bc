pub mod modules;
pub use modules::auth;
pub use modules::portfolio;
pub mod health;

mod api;
mod config;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::RedisTokenBlacklist;
use crate::auth::application::domain::entities::AdminAccount;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenBlacklist, TokenProvider};
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
};
use crate::config::{AppConfig, Argon2Settings};
use crate::portfolio::adapter::outgoing::{
    DisabledFileStorage, PortfolioQueryPostgres, PortfolioRepositoryPostgres,
};
use crate::portfolio::application::domain::fallback::FallbackContent;
use crate::portfolio::application::domain::{
    CertificateDraft, EducationDraft, ExperienceDraft, SkillDraft,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    GetDashboardUseCase, GetPublicPortfolioUseCase, ManageFilesUseCase, ManageRecordsUseCase,
    UpdateProfileUseCase,
};
use crate::portfolio::application::services::{
    DashboardService, FileService, ManageRecordsService, ProfileService, PublicPortfolioService,
};
use crate::shared::api::custom_json_config;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// Largest body accepted by the upload route.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub public_portfolio_use_case: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    pub dashboard_use_case: Arc<dyn GetDashboardUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub manage_skills_use_case: Arc<dyn ManageRecordsUseCase<SkillDraft> + Send + Sync>,
    pub manage_experiences_use_case: Arc<dyn ManageRecordsUseCase<ExperienceDraft> + Send + Sync>,
    pub manage_education_use_case: Arc<dyn ManageRecordsUseCase<EducationDraft> + Send + Sync>,
    pub manage_certificates_use_case:
        Arc<dyn ManageRecordsUseCase<CertificateDraft> + Send + Sync>,
    pub manage_files_use_case: Arc<dyn ManageFilesUseCase + Send + Sync>,
}

/// `portfolio_actix hash-password <password>` prints an argon2 hash for `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
async fn hash_password_command(password: Option<String>) -> anyhow::Result<()> {
    let password = password.context("usage: portfolio_actix hash-password <password>")?;

    let settings = Argon2Settings::from_env().context("invalid ARGON2_* settings")?;
    let hasher = Argon2Hasher::from_settings(&settings)?;
    let hash = hasher.hash_password(&password).await?;

    println!("{hash}");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config::load_dotenv();

    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("hash-password") {
        return hash_password_command(args.next()).await;
    }

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;

    let redis_arc = Arc::new(redis_pool);

    // Auth
    let account = AdminAccount::new(&config.admin.email, &config.admin.password_hash)?;
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let argon2_hasher = Argon2Hasher::from_settings(&config.argon2)?;
    let token_blacklist = RedisTokenBlacklist::new(Arc::clone(&redis_arc));

    let login_admin_use_case = LoginAdminUseCase::new(
        account,
        Arc::new(argon2_hasher),
        Arc::new(jwt_service.clone()),
    );
    let logout_admin_use_case = LogoutAdminUseCase::new(Arc::new(token_blacklist.clone()));

    // Portfolio
    let content = Arc::new(
        FallbackContent::load(config.fallback_content_path.as_deref())
            .context("Failed to load fallback content")?,
    );
    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(&db_arc));
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        login_admin_use_case: Arc::new(login_admin_use_case),
        logout_admin_use_case: Arc::new(logout_admin_use_case),
        public_portfolio_use_case: Arc::new(PublicPortfolioService::new(
            portfolio_query.clone(),
            content,
        )),
        dashboard_use_case: Arc::new(DashboardService::new(portfolio_query.clone())),
        update_profile_use_case: Arc::new(ProfileService::new(
            portfolio_repo.clone(),
            portfolio_query.clone(),
        )),
        manage_skills_use_case: Arc::new(ManageRecordsService::<SkillDraft, _, _>::new(
            portfolio_repo.clone(),
            portfolio_query.clone(),
        )),
        manage_experiences_use_case: Arc::new(ManageRecordsService::<ExperienceDraft, _, _>::new(
            portfolio_repo.clone(),
            portfolio_query.clone(),
        )),
        manage_education_use_case: Arc::new(ManageRecordsService::<EducationDraft, _, _>::new(
            portfolio_repo.clone(),
            portfolio_query.clone(),
        )),
        manage_certificates_use_case: Arc::new(
            ManageRecordsService::<CertificateDraft, _, _>::new(
                portfolio_repo.clone(),
                portfolio_query.clone(),
            ),
        ),
        manage_files_use_case: Arc::new(FileService::new(
            portfolio_repo,
            DisabledFileStorage,
            portfolio_query,
        )),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let token_blacklist_arc: Arc<dyn TokenBlacklist + Send + Sync> = Arc::new(token_blacklist);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&token_blacklist_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::portfolio::adapter::incoming::web::routes as portfolio_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public site
    cfg.service(portfolio_routes::portfolio_page_handler);
    cfg.service(portfolio_routes::public_header_handler);
    cfg.service(portfolio_routes::public_hero_handler);
    cfg.service(portfolio_routes::public_about_handler);
    cfg.service(portfolio_routes::public_skills_handler);
    cfg.service(portfolio_routes::public_experiences_handler);
    cfg.service(portfolio_routes::public_cv_handler);
    // Auth
    cfg.service(auth_routes::admin_redirect_handler);
    cfg.service(auth_routes::login_admin_handler);
    cfg.service(auth_routes::logout_admin_handler);
    // Dashboard
    cfg.service(portfolio_routes::get_dashboard_handler);
    cfg.service(portfolio_routes::update_profile_handler);
    cfg.service(portfolio_routes::skill_categories_handler);
    cfg.service(portfolio_routes::create_skill_handler);
    cfg.service(portfolio_routes::update_skill_handler);
    cfg.service(portfolio_routes::delete_skill_handler);
    cfg.service(portfolio_routes::create_experience_handler);
    cfg.service(portfolio_routes::update_experience_handler);
    cfg.service(portfolio_routes::delete_experience_handler);
    cfg.service(portfolio_routes::create_education_handler);
    cfg.service(portfolio_routes::update_education_handler);
    cfg.service(portfolio_routes::delete_education_handler);
    cfg.service(portfolio_routes::create_certificate_handler);
    cfg.service(portfolio_routes::update_certificate_handler);
    cfg.service(portfolio_routes::delete_certificate_handler);
    cfg.service(portfolio_routes::upload_file_handler);
    cfg.service(portfolio_routes::register_file_handler);
    cfg.service(portfolio_routes::delete_file_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
