pub mod disabled_file_storage;
pub mod portfolio_query_postgres;
pub mod portfolio_repository_postgres;
pub mod sea_orm_entity;

pub use disabled_file_storage::DisabledFileStorage;
pub use portfolio_query_postgres::PortfolioQueryPostgres;
pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
