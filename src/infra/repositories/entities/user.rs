//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            employee_id: model.employee_id,
            title: model.title,
            first_name: model.first_name,
            last_name: model.last_name,
            department: model.department,
            role: UserRole::from(model.role.as_str()),
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
