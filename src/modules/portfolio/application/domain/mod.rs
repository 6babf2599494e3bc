pub mod dashboard;
pub mod drafts;
pub mod entities;
pub mod fallback;
pub mod sections;

pub use dashboard::{category_suggestions, ActiveFiles, DashboardSnapshot, MutationOutcome};
pub use drafts::{
    CertificateDraft, DraftError, EducationDraft, ExperienceDraft, FileRegistration,
    ProfileDraft, RecordDraft, SkillDraft,
};
pub use entities::{Certificate, Education, Experience, FileRecord, FileType, Profile, Skill};
pub use fallback::{FallbackContent, FallbackContentError};
pub use sections::{PortfolioPage, Source};
