use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::portfolio::application::domain::Certificate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date_issued: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub file_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Certificate {
        Certificate {
            id: self.id,
            name: self.name,
            issuer: self.issuer,
            date_issued: self.date_issued,
            file_url: self.file_url,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
