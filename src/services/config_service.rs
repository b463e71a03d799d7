//! Config service - login screen branding.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AppConfig, AppConfigChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Config service trait for dependency injection.
#[async_trait]
pub trait ConfigService: Send + Sync {
    /// Stored branding, or the defaults when nothing is stored
    async fn get_config(&self) -> AppResult<AppConfig>;

    /// Change only the supplied fields
    async fn update_config(&self, changes: AppConfigChanges) -> AppResult<AppConfig>;
}

/// Concrete implementation of ConfigService using Unit of Work.
pub struct ConfigManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ConfigManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ConfigService for ConfigManager<U> {
    async fn get_config(&self) -> AppResult<AppConfig> {
        Ok(self.uow.settings().get().await?.unwrap_or_default())
    }

    async fn update_config(&self, changes: AppConfigChanges) -> AppResult<AppConfig> {
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        let settings = self.uow.settings();
        let current = settings.get().await?.unwrap_or_default();
        settings.save(changes.apply(current)).await
    }
}
