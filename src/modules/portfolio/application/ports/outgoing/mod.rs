pub mod file_storage;
pub mod portfolio_query;
pub mod record_repository;

pub use file_storage::{FileStorage, StorageError};
pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
pub use record_repository::{FileRepository, ProfileRepository, RecordRepository, RepositoryError};

#[cfg(test)]
pub use portfolio_query::MockPortfolioQuery;
