use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::portfolio::application::domain::Education;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub score: String,
    pub completion_date: String,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Education {
        Education {
            id: self.id,
            degree: self.degree,
            institution: self.institution,
            score: self.score,
            completion_date: self.completion_date,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
