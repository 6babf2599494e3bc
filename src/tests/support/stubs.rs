use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::auth::application::use_cases::logout_admin::{
    ILogoutAdminUseCase, LogoutCommand, LogoutResponse, LOGIN_ROUTE,
};
use crate::portfolio::application::domain::{
    Certificate, DashboardSnapshot, Education, Experience, FileRecord, FileRegistration, FileType,
    MutationOutcome, Profile, ProfileDraft, RecordDraft, Skill,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    DashboardError, FileUpload, GetDashboardUseCase, ManageFilesUseCase, ManageRecordsUseCase,
    MutationError, MutationResult, UpdateProfileUseCase,
};
use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};

// ========================= Auth =========================

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutAdminUseCase;

#[async_trait]
impl ILogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _command: LogoutCommand) -> LogoutResponse {
        LogoutResponse {
            message: "Logged out successfully".to_string(),
            redirect_to: LOGIN_ROUTE.to_string(),
            token_revoked: true,
        }
    }
}

// ========================= Portfolio reads =========================

/// Query port whose every read fails, as with an unreachable database.
#[derive(Default, Clone)]
pub struct UnreachablePortfolioQuery;

fn unreachable() -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError("connection refused".to_string())
}

#[async_trait]
impl PortfolioQuery for UnreachablePortfolioQuery {
    async fn first_profile(&self) -> Result<Option<Profile>, PortfolioQueryError> {
        Err(unreachable())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError> {
        Err(unreachable())
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError> {
        Err(unreachable())
    }

    async fn list_education(&self) -> Result<Vec<Education>, PortfolioQueryError> {
        Err(unreachable())
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, PortfolioQueryError> {
        Err(unreachable())
    }

    async fn list_files(&self) -> Result<Vec<FileRecord>, PortfolioQueryError> {
        Err(unreachable())
    }

    async fn list_active_files(&self) -> Result<Vec<FileRecord>, PortfolioQueryError> {
        Err(unreachable())
    }

    async fn latest_active_file(
        &self,
        _file_type: FileType,
    ) -> Result<Option<FileRecord>, PortfolioQueryError> {
        Err(unreachable())
    }
}

pub fn empty_snapshot() -> DashboardSnapshot {
    DashboardSnapshot::new(None, vec![], vec![], vec![], vec![], vec![])
}

#[derive(Clone)]
pub struct StubDashboardUseCase {
    snapshot: Result<DashboardSnapshot, DashboardError>,
    categories: Vec<String>,
}

impl StubDashboardUseCase {
    pub fn with_snapshot(snapshot: DashboardSnapshot) -> Self {
        Self {
            categories: snapshot.skill_categories.clone(),
            snapshot: Ok(snapshot),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            snapshot: Err(DashboardError::Unavailable("connection refused".to_string())),
            categories: vec![],
        }
    }
}

impl Default for StubDashboardUseCase {
    fn default() -> Self {
        Self::with_snapshot(empty_snapshot())
    }
}

#[async_trait]
impl GetDashboardUseCase for StubDashboardUseCase {
    async fn execute(&self) -> Result<DashboardSnapshot, DashboardError> {
        self.snapshot.clone()
    }

    async fn category_suggestions(&self, query: &str) -> Result<Vec<String>, DashboardError> {
        if let Err(e) = &self.snapshot {
            return Err(e.clone());
        }
        let needle = query.to_lowercase();
        Ok(self
            .categories
            .iter()
            .filter(|c| c.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

// ========================= Portfolio writes =========================

/// What a mutation stub was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationCall {
    Profile(ProfileDraft),
    Create,
    Update(Uuid),
    Delete(Uuid),
    Register(FileRegistration),
    Upload { file_name: String, size: usize },
    Deactivate(Uuid),
}

/// Answers every write with a fixed result and records the calls it saw.
#[derive(Clone)]
pub struct StubMutation {
    result: MutationResult,
    pub calls: Arc<Mutex<Vec<MutationCall>>>,
}

impl StubMutation {
    pub fn succeeds(message: &str) -> Self {
        Self {
            result: Ok(MutationOutcome {
                message: message.to_string(),
                dashboard: empty_snapshot(),
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn fails(error: MutationError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded(&self) -> Vec<MutationCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: MutationCall) -> MutationResult {
        self.calls.lock().unwrap().push(call);
        self.result.clone()
    }
}

impl Default for StubMutation {
    fn default() -> Self {
        Self::succeeds("Saved successfully!")
    }
}

#[async_trait]
impl UpdateProfileUseCase for StubMutation {
    async fn execute(&self, draft: ProfileDraft) -> MutationResult {
        self.answer(MutationCall::Profile(draft))
    }
}

#[async_trait]
impl<D: RecordDraft> ManageRecordsUseCase<D> for StubMutation {
    async fn create(&self, _draft: D) -> MutationResult {
        self.answer(MutationCall::Create)
    }

    async fn update(&self, id: Uuid, _draft: D) -> MutationResult {
        self.answer(MutationCall::Update(id))
    }

    async fn delete(&self, id: Uuid) -> MutationResult {
        self.answer(MutationCall::Delete(id))
    }
}

#[async_trait]
impl ManageFilesUseCase for StubMutation {
    async fn register(&self, registration: FileRegistration) -> MutationResult {
        self.answer(MutationCall::Register(registration))
    }

    async fn upload(&self, upload: FileUpload) -> MutationResult {
        self.answer(MutationCall::Upload {
            file_name: upload.file_name,
            size: upload.bytes.len(),
        })
    }

    async fn deactivate(&self, id: Uuid) -> MutationResult {
        self.answer(MutationCall::Deactivate(id))
    }
}
