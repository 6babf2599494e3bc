use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::portfolio::application::domain::Experience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// JSON array of bullet lines.
    #[sea_orm(column_type = "JsonBinary")]
    pub description: JsonValue,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Experience {
        Experience {
            id: self.id,
            title: self.title,
            company: self.company,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            description: serde_json::from_value(self.description).unwrap_or_default(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
