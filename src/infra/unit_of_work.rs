//! Unit of Work - centralized repository access.
//!
//! Services never construct repositories themselves; they receive a
//! `UnitOfWork` and ask it for the repository they need. Tests swap in a
//! unit of work that hands out mocks.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    ConfigRepository, ConfigStore, LogRepository, LogStore, ProductRepository, ProductStore,
    UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn products(&self) -> Arc<dyn ProductRepository>;

    fn logs(&self) -> Arc<dyn LogRepository>;

    fn settings(&self) -> Arc<dyn ConfigRepository>;
}

/// Concrete implementation of UnitOfWork over one connection pool
pub struct Persistence {
    users: Arc<UserStore>,
    products: Arc<ProductStore>,
    logs: Arc<LogStore>,
    settings: Arc<ConfigStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            products: Arc::new(ProductStore::new(db.clone())),
            logs: Arc::new(LogStore::new(db.clone())),
            settings: Arc::new(ConfigStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn logs(&self) -> Arc<dyn LogRepository> {
        self.logs.clone()
    }

    fn settings(&self) -> Arc<dyn ConfigRepository> {
        self.settings.clone()
    }
}
