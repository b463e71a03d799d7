//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CatalogService, ConfigService, LogService, ProductService, ServiceContainer,
    Services, UserService,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub product_service: Arc<dyn ProductService>,
    pub log_service: Arc<dyn LogService>,
    pub config_service: Arc<dyn ConfigService>,
    pub catalog_service: Arc<dyn CatalogService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the services over `database` and wire them into state.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container, database)
    }

    /// State backed by an existing service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            product_service: container.products(),
            log_service: container.logs(),
            config_service: container.config(),
            catalog_service: container.catalog(),
            database,
        }
    }
}
