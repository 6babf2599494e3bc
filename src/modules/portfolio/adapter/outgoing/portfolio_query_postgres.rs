use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::warn;

use super::sea_orm_entity::{certificates, education, experiences, files, profiles, skills};
use crate::portfolio::application::domain::{
    Certificate, Education, Experience, FileRecord, FileType, Profile, Skill,
};
use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};

#[derive(Clone, Debug)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}

/// Rows with a file_type this build does not know are left out.
fn known_files(rows: Vec<files::Model>) -> Vec<FileRecord> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match row.to_domain() {
                Ok(file) => Some(file),
                Err(e) => {
                    warn!(file_id = %id, error = %e, "Skipping file row");
                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn first_profile(&self) -> Result<Option<Profile>, PortfolioQueryError> {
        let row = profiles::Entity::find()
            .order_by_asc(profiles::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(profiles::Model::to_domain))
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError> {
        let rows = skills::Entity::find()
            .order_by_asc(skills::Column::Category)
            .order_by_asc(skills::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(skills::Model::to_domain).collect())
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError> {
        let rows = experiences::Entity::find()
            .order_by_desc(experiences::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(experiences::Model::to_domain).collect())
    }

    async fn list_education(&self) -> Result<Vec<Education>, PortfolioQueryError> {
        let rows = education::Entity::find()
            .order_by_desc(education::Column::CompletionDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(education::Model::to_domain).collect())
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, PortfolioQueryError> {
        let rows = certificates::Entity::find()
            .order_by_desc(certificates::Column::DateIssued)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(certificates::Model::to_domain).collect())
    }

    async fn list_files(&self) -> Result<Vec<FileRecord>, PortfolioQueryError> {
        let rows = files::Entity::find()
            .order_by_desc(files::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(known_files(rows))
    }

    async fn list_active_files(&self) -> Result<Vec<FileRecord>, PortfolioQueryError> {
        let rows = files::Entity::find()
            .filter(files::Column::IsActive.eq(true))
            .order_by_desc(files::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(known_files(rows))
    }

    async fn latest_active_file(
        &self,
        file_type: FileType,
    ) -> Result<Option<FileRecord>, PortfolioQueryError> {
        let row = files::Entity::find()
            .filter(files::Column::FileType.eq(file_type.as_str()))
            .filter(files::Column::IsActive.eq(true))
            .order_by_desc(files::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.and_then(|r| known_files(vec![r]).pop()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn skill_model(category: &str, name: &str) -> skills::Model {
        skills::Model {
            id: Uuid::new_v4(),
            category: category.to_string(),
            name: name.to_string(),
            level: 75,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn file_model(file_type: &str, url: &str) -> files::Model {
        files::Model {
            id: Uuid::new_v4(),
            file_type: file_type.to_string(),
            file_name: "file".to_string(),
            file_url: url.to_string(),
            is_active: true,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn first_profile_none_when_table_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .into_connection();

        let query = PortfolioQueryPostgres::new(Arc::new(db));

        assert!(query.first_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_skills_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                skill_model("Backend", "Rust"),
                skill_model("Frontend", "React"),
            ]])
            .into_connection();

        let skills = PortfolioQueryPostgres::new(Arc::new(db))
            .list_skills()
            .await
            .unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Rust");
        assert_eq!(skills[1].category, "Frontend");
    }

    #[tokio::test]
    async fn experience_description_decodes_json_lines() {
        let model = experiences::Model {
            id: Uuid::new_v4(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "Jan 2023".to_string(),
            end_date: "Present".to_string(),
            description: serde_json::json!(["Built APIs", "Ran migrations"]),
            created_at: Utc::now().fixed_offset(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let rows = PortfolioQueryPostgres::new(Arc::new(db))
            .list_experiences()
            .await
            .unwrap();

        assert_eq!(rows[0].description, vec!["Built APIs", "Ran migrations"]);
    }

    #[tokio::test]
    async fn unknown_file_types_are_skipped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                file_model("cv", "/files/cv.pdf"),
                file_model("banner", "/files/banner.png"),
            ]])
            .into_connection();

        let files = PortfolioQueryPostgres::new(Arc::new(db))
            .list_files()
            .await
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_type, FileType::Cv);
    }

    #[tokio::test]
    async fn latest_active_file_returns_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![file_model("profile_pic", "/files/me.png")]])
            .into_connection();

        let file = PortfolioQueryPostgres::new(Arc::new(db))
            .latest_active_file(FileType::ProfilePic)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(file.file_url, "/files/me.png");
    }

    #[tokio::test]
    async fn database_errors_are_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection lost".into())])
            .into_connection();

        let result = PortfolioQueryPostgres::new(Arc::new(db)).list_skills().await;

        assert!(matches!(result, Err(PortfolioQueryError::DatabaseError(_))));
    }
}
