//! Activity log database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{ActivityLog, ActivityType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub action_type: String,
    pub user_name: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub device: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rows written before the type column was constrained may hold
    /// anything; those read back as admin entries.
    pub fn into_domain(self) -> ActivityLog {
        ActivityLog {
            id: self.id,
            kind: ActivityType::parse(&self.action_type).unwrap_or(ActivityType::Admin),
            user: self.user_name,
            details: self.details,
            device: self.device,
            timestamp: self.timestamp,
        }
    }
}
