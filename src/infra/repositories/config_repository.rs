//! Branding config repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::app_config::{ActiveModel, Entity as AppConfigEntity};
use crate::config::APP_CONFIG_ID;
use crate::domain::AppConfig;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Access to the singleton config row.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Stored config, `None` if the row is missing
    async fn get(&self) -> AppResult<Option<AppConfig>>;

    /// Write the full config row, creating it if needed
    async fn save(&self, config: AppConfig) -> AppResult<AppConfig>;
}

/// SeaORM-backed ConfigRepository
pub struct ConfigStore {
    db: DatabaseConnection,
}

impl ConfigStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConfigRepository for ConfigStore {
    async fn get(&self) -> AppResult<Option<AppConfig>> {
        let model = AppConfigEntity::find_by_id(APP_CONFIG_ID)
            .one(&self.db)
            .await?;

        Ok(model.map(AppConfig::from))
    }

    async fn save(&self, config: AppConfig) -> AppResult<AppConfig> {
        let existing = AppConfigEntity::find_by_id(APP_CONFIG_ID)
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.logo = Set(config.logo);
                active.app_name = Set(config.app_name);
                active.update(&self.db).await?
            }
            None => {
                ActiveModel {
                    id: Set(APP_CONFIG_ID),
                    logo: Set(config.logo),
                    app_name: Set(config.app_name),
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(AppConfig::from(model))
    }
}
