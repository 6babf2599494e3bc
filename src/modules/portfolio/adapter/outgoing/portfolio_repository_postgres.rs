use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{certificates, education, experiences, files, profiles, skills};
use crate::portfolio::application::domain::{
    Certificate, CertificateDraft, Education, EducationDraft, Experience, ExperienceDraft,
    FileRecord, FileRegistration, Profile, ProfileDraft, Skill, SkillDraft,
};
use crate::portfolio::application::ports::outgoing::{
    FileRepository, ProfileRepository, RecordRepository, RepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

/// Write side for every dashboard table.
#[derive(Clone, Debug)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for PortfolioRepositoryPostgres {
    async fn upsert_first(&self, draft: ProfileDraft) -> Result<Profile, RepositoryError> {
        let existing = profiles::Entity::find()
            .order_by_asc(profiles::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut model = match existing {
            Some(row) => row.into_active_model(),
            None => {
                let now = Utc::now().fixed_offset();
                profiles::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
            }
        };

        model.name = Set(draft.name().to_string());
        model.title = Set(draft.title().to_string());
        model.email = Set(draft.email().to_string());
        model.phone = Set(draft.phone().to_string());
        model.location = Set(draft.location().to_string());
        model.bio = Set(draft.bio().to_string());

        // before_save stamps updated_at on the update path
        let row = if model.id.is_unchanged() {
            model.update(&*self.db).await
        } else {
            model.insert(&*self.db).await
        }
        .map_err(map_db_err)?;

        Ok(row.to_domain())
    }
}

#[async_trait]
impl RecordRepository<SkillDraft> for PortfolioRepositoryPostgres {
    async fn insert(&self, draft: SkillDraft) -> Result<Skill, RepositoryError> {
        let model = skills::ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(draft.category().to_string()),
            name: Set(draft.name().to_string()),
            level: Set(draft.level()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(row.to_domain())
    }

    async fn update(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, RepositoryError> {
        let model = skills::ActiveModel {
            category: Set(draft.category().to_string()),
            name: Set(draft.name().to_string()),
            level: Set(draft.level()),
            ..Default::default()
        };

        let rows = skills::Entity::update_many()
            .set(model)
            .filter(skills::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows.into_iter().next().ok_or(RepositoryError::NotFound)?;
        Ok(row.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = skills::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_affected(result.rows_affected)
    }
}

#[async_trait]
impl RecordRepository<ExperienceDraft> for PortfolioRepositoryPostgres {
    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, RepositoryError> {
        let model = experiences::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title().to_string()),
            company: Set(draft.company().to_string()),
            location: Set(draft.location().to_string()),
            start_date: Set(draft.start_date().to_string()),
            end_date: Set(draft.end_date().to_string()),
            description: Set(description_json(&draft)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(row.to_domain())
    }

    async fn update(&self, id: Uuid, draft: ExperienceDraft) -> Result<Experience, RepositoryError> {
        let model = experiences::ActiveModel {
            title: Set(draft.title().to_string()),
            company: Set(draft.company().to_string()),
            location: Set(draft.location().to_string()),
            start_date: Set(draft.start_date().to_string()),
            end_date: Set(draft.end_date().to_string()),
            description: Set(description_json(&draft)),
            ..Default::default()
        };

        let rows = experiences::Entity::update_many()
            .set(model)
            .filter(experiences::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows.into_iter().next().ok_or(RepositoryError::NotFound)?;
        Ok(row.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = experiences::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_affected(result.rows_affected)
    }
}

#[async_trait]
impl RecordRepository<EducationDraft> for PortfolioRepositoryPostgres {
    async fn insert(&self, draft: EducationDraft) -> Result<Education, RepositoryError> {
        let model = education::ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(draft.degree().to_string()),
            institution: Set(draft.institution().to_string()),
            score: Set(draft.score().to_string()),
            completion_date: Set(draft.completion_date().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(row.to_domain())
    }

    async fn update(&self, id: Uuid, draft: EducationDraft) -> Result<Education, RepositoryError> {
        let model = education::ActiveModel {
            degree: Set(draft.degree().to_string()),
            institution: Set(draft.institution().to_string()),
            score: Set(draft.score().to_string()),
            completion_date: Set(draft.completion_date().to_string()),
            ..Default::default()
        };

        let rows = education::Entity::update_many()
            .set(model)
            .filter(education::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows.into_iter().next().ok_or(RepositoryError::NotFound)?;
        Ok(row.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = education::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_affected(result.rows_affected)
    }
}

#[async_trait]
impl RecordRepository<CertificateDraft> for PortfolioRepositoryPostgres {
    async fn insert(&self, draft: CertificateDraft) -> Result<Certificate, RepositoryError> {
        let model = certificates::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name().to_string()),
            issuer: Set(draft.issuer().to_string()),
            date_issued: Set(draft.date_issued().to_string()),
            file_url: Set(draft.file_url().map(str::to_string)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(row.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        draft: CertificateDraft,
    ) -> Result<Certificate, RepositoryError> {
        let model = certificates::ActiveModel {
            name: Set(draft.name().to_string()),
            issuer: Set(draft.issuer().to_string()),
            date_issued: Set(draft.date_issued().to_string()),
            file_url: Set(draft.file_url().map(str::to_string)),
            ..Default::default()
        };

        let rows = certificates::Entity::update_many()
            .set(model)
            .filter(certificates::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows.into_iter().next().ok_or(RepositoryError::NotFound)?;
        Ok(row.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = certificates::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_affected(result.rows_affected)
    }
}

#[async_trait]
impl FileRepository for PortfolioRepositoryPostgres {
    async fn register(&self, registration: FileRegistration) -> Result<FileRecord, RepositoryError> {
        let file_type = registration.file_type();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        files::Entity::update_many()
            .col_expr(files::Column::IsActive, Expr::value(false))
            .filter(files::Column::FileType.eq(file_type.as_str()))
            .filter(files::Column::IsActive.eq(true))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let model = files::ActiveModel {
            id: Set(Uuid::new_v4()),
            file_type: Set(file_type.as_str().to_string()),
            file_name: Set(registration.file_name().to_string()),
            file_url: Set(registration.file_url().to_string()),
            is_active: Set(true),
            created_at: Set(Utc::now().fixed_offset()),
        };
        let row = model.insert(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        file_to_domain(row)
    }

    async fn deactivate(&self, id: Uuid) -> Result<FileRecord, RepositoryError> {
        let rows = files::Entity::update_many()
            .col_expr(files::Column::IsActive, Expr::value(false))
            .filter(files::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows.into_iter().next().ok_or(RepositoryError::NotFound)?;
        file_to_domain(row)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn description_json(draft: &ExperienceDraft) -> JsonValue {
    JsonValue::from(draft.description().to_vec())
}

fn file_to_domain(row: files::Model) -> Result<FileRecord, RepositoryError> {
    row.to_domain()
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
}

fn ensure_affected(rows_affected: u64) -> Result<(), RepositoryError> {
    if rows_affected == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

fn map_db_err(e: DbErr) -> RepositoryError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepositoryError::NotFound,
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
