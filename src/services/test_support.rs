//! Unit of work handing out mock repositories.

use std::sync::Arc;

use crate::infra::{
    ConfigRepository, LogRepository, MockConfigRepository, MockLogRepository,
    MockProductRepository, MockUserRepository, ProductRepository, UnitOfWork, UserRepository,
};

/// Repositories without expectations panic when called.
pub struct TestUnitOfWork {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
    logs: Arc<dyn LogRepository>,
    settings: Arc<dyn ConfigRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            products: Arc::new(MockProductRepository::new()),
            logs: Arc::new(MockLogRepository::new()),
            settings: Arc::new(MockConfigRepository::new()),
        }
    }
}

impl TestUnitOfWork {
    pub fn with_users(repo: MockUserRepository) -> Self {
        Self {
            users: Arc::new(repo),
            ..Self::default()
        }
    }

    pub fn with_products(repo: MockProductRepository) -> Self {
        Self {
            products: Arc::new(repo),
            ..Self::default()
        }
    }

    pub fn with_logs(repo: MockLogRepository) -> Self {
        Self {
            logs: Arc::new(repo),
            ..Self::default()
        }
    }

    pub fn with_settings(repo: MockConfigRepository) -> Self {
        Self {
            settings: Arc::new(repo),
            ..Self::default()
        }
    }

    pub fn and_logs(mut self, repo: MockLogRepository) -> Self {
        self.logs = Arc::new(repo);
        self
    }
}

impl UnitOfWork for TestUnitOfWork {
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
