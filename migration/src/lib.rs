pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_profiles_table;
mod m20250601_000002_create_skills_table;
mod m20250601_000003_create_experiences_table;
mod m20250601_000004_create_education_table;
mod m20250601_000005_create_certificates_table;
mod m20250601_000006_create_files_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_profiles_table::Migration),
            Box::new(m20250601_000002_create_skills_table::Migration),
            Box::new(m20250601_000003_create_experiences_table::Migration),
            Box::new(m20250601_000004_create_education_table::Migration),
            Box::new(m20250601_000005_create_certificates_table::Migration),
            Box::new(m20250601_000006_create_files_table::Migration),
        ]
    }
}
