pub mod get_dashboard;
pub mod get_public_portfolio;
pub mod manage_files;
pub mod manage_records;
pub mod mutation;
pub mod update_profile;

pub use get_dashboard::{DashboardError, GetDashboardUseCase};
pub use get_public_portfolio::GetPublicPortfolioUseCase;
pub use manage_files::{FileUpload, ManageFilesUseCase};
pub use manage_records::ManageRecordsUseCase;
pub use mutation::{MutationError, MutationResult};
pub use update_profile::UpdateProfileUseCase;
