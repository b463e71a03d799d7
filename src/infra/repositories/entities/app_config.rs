//! Branding config database entity for SeaORM (single row, id 1).

use sea_orm::entity::prelude::*;

use crate::domain::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub logo: Option<String>,
    pub app_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AppConfig {
    fn from(model: Model) -> Self {
        AppConfig {
            logo: model.logo,
            app_name: model.app_name,
        }
    }
}
