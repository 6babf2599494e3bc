pub mod dashboard_service;
pub mod file_service;
pub mod profile_service;
pub mod public_portfolio_service;
pub mod record_service;

pub use dashboard_service::DashboardService;
pub use file_service::FileService;
pub use profile_service::ProfileService;
pub use public_portfolio_service::PublicPortfolioService;
pub use record_service::ManageRecordsService;
