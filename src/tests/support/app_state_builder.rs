use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::auth::application::use_cases::logout_admin::ILogoutAdminUseCase;
use crate::portfolio::application::domain::{
    CertificateDraft, EducationDraft, ExperienceDraft, SkillDraft,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    GetDashboardUseCase, GetPublicPortfolioUseCase, ManageFilesUseCase, ManageRecordsUseCase,
    UpdateProfileUseCase,
};
use crate::portfolio::application::services::PublicPortfolioService;
use crate::tests::support::portfolio_fixtures::fallback_content;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    logout_admin: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    public_portfolio: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
    update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    manage_skills: Arc<dyn ManageRecordsUseCase<SkillDraft> + Send + Sync>,
    manage_experiences: Arc<dyn ManageRecordsUseCase<ExperienceDraft> + Send + Sync>,
    manage_education: Arc<dyn ManageRecordsUseCase<EducationDraft> + Send + Sync>,
    manage_certificates: Arc<dyn ManageRecordsUseCase<CertificateDraft> + Send + Sync>,
    manage_files: Arc<dyn ManageFilesUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdminUseCase),
            logout_admin: Arc::new(StubLogoutAdminUseCase),
            public_portfolio: Arc::new(PublicPortfolioService::new(
                UnreachablePortfolioQuery,
                fallback_content(),
            )),
            dashboard: Arc::new(StubDashboardUseCase::default()),
            update_profile: Arc::new(StubMutation::default()),
            manage_skills: Arc::new(StubMutation::default()),
            manage_experiences: Arc::new(StubMutation::default()),
            manage_education: Arc::new(StubMutation::default()),
            manage_certificates: Arc::new(StubMutation::default()),
            manage_files: Arc::new(StubMutation::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(mut self, uc: impl ILogoutAdminUseCase + 'static) -> Self {
        self.logout_admin = Arc::new(uc);
        self
    }

    pub fn with_public_portfolio(mut self, uc: impl GetPublicPortfolioUseCase + 'static) -> Self {
        self.public_portfolio = Arc::new(uc);
        self
    }

    pub fn with_dashboard(mut self, uc: impl GetDashboardUseCase + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_manage_skills(
        mut self,
        uc: impl ManageRecordsUseCase<SkillDraft> + 'static,
    ) -> Self {
        self.manage_skills = Arc::new(uc);
        self
    }

    pub fn with_manage_experiences(
        mut self,
        uc: impl ManageRecordsUseCase<ExperienceDraft> + 'static,
    ) -> Self {
        self.manage_experiences = Arc::new(uc);
        self
    }

    pub fn with_manage_education(
        mut self,
        uc: impl ManageRecordsUseCase<EducationDraft> + 'static,
    ) -> Self {
        self.manage_education = Arc::new(uc);
        self
    }

    pub fn with_manage_certificates(
        mut self,
        uc: impl ManageRecordsUseCase<CertificateDraft> + 'static,
    ) -> Self {
        self.manage_certificates = Arc::new(uc);
        self
    }

    pub fn with_manage_files(mut self, uc: impl ManageFilesUseCase + 'static) -> Self {
        self.manage_files = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            logout_admin_use_case: self.logout_admin,
            public_portfolio_use_case: self.public_portfolio,
            dashboard_use_case: self.dashboard,
            update_profile_use_case: self.update_profile,
            manage_skills_use_case: self.manage_skills,
            manage_experiences_use_case: self.manage_experiences,
            manage_education_use_case: self.manage_education,
            manage_certificates_use_case: self.manage_certificates,
            manage_files_use_case: self.manage_files,
        })
    }
}
