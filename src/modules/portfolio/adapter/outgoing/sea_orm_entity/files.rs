use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::portfolio::application::domain::entities::UnknownFileType;
use crate::portfolio::application::domain::{FileRecord, FileType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// `cv` or `profile_pic`
    pub file_type: String,
    pub file_name: String,
    #[sea_orm(column_type = "Text")]
    pub file_url: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Result<FileRecord, UnknownFileType> {
        let file_type: FileType = self.file_type.parse()?;

        Ok(FileRecord {
            id: self.id,
            file_type,
            file_name: self.file_name,
            file_url: self.file_url,
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
