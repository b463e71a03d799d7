//! Service Container - Centralized service access with parallel execution support.
//!
//! Handlers and commands reach every use case through one `ServiceContainer`,
//! which depends on service traits rather than implementations.

use std::future::Future;
use std::sync::Arc;

use super::{
    AuthService, Authenticator, CatalogManager, CatalogService, ConfigManager, ConfigService,
    LogManager, LogService, ProductManager, ProductService, UserManager, UserService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn products(&self) -> Arc<dyn ProductService>;

    fn logs(&self) -> Arc<dyn LogService>;

    fn config(&self) -> Arc<dyn ConfigService>;

    fn catalog(&self) -> Arc<dyn CatalogService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    product_service: Arc<dyn ProductService>,
    log_service: Arc<dyn LogService>,
    config_service: Arc<dyn ConfigService>,
    catalog_service: Arc<dyn CatalogService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        let product_service: Arc<dyn ProductService> = Arc::new(ProductManager::new(uow.clone()));
        let log_service: Arc<dyn LogService> = Arc::new(LogManager::new(uow.clone()));
        let catalog_service = Arc::new(CatalogManager::new(
            product_service.clone(),
            log_service.clone(),
            config.import_batch_size,
        ));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config.relaxed_login)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            product_service,
            log_service,
            config_service: Arc::new(ConfigManager::new(uow)),
            catalog_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn logs(&self) -> Arc<dyn LogService> {
        self.log_service.clone()
    }

    fn config(&self) -> Arc<dyn ConfigService> {
        self.config_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// If either operation fails, the error is returned immediately.
    ///
    /// # Example
    /// ```ignore
    /// let (products, branding) = parallel::join2(
    ///     services.products().list_products(),
    ///     services.config().get_config(),
    /// ).await?;
    /// ```
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// Results are returned in the same order as the input futures.
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}

/// Batch operations for bulk processing.
pub mod batch {
    use super::*;
    use crate::errors::AppError;

    /// Process items in batches with parallel execution within each batch.
    ///
    /// A batch starts only after the previous one has fully completed.
    ///
    /// # Example
    /// ```ignore
    /// let ids = batch::process(rows, 20, |product| {
    ///     services.products().create_product(product)
    /// }).await?;
    /// ```
    pub async fn process<T, R, F, Fut>(
        items: Vec<T>,
        batch_size: usize,
        processor: F,
    ) -> AppResult<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> Fut + Send + Sync,
        Fut: Future<Output = AppResult<R>> + Send,
    {
        if batch_size == 0 {
            return Err(AppError::validation("batch_size must be greater than 0"));
        }

        let mut results = Vec::with_capacity(items.len());
        let mut remaining = items;

        while !remaining.is_empty() {
            let drain_count = std::cmp::min(batch_size, remaining.len());
            let chunk: Vec<T> = remaining.drain(..drain_count).collect();

            let chunk_futures: Vec<_> = chunk.into_iter().map(&processor).collect();

            let chunk_results = parallel::join_all(chunk_futures).await?;
            results.extend(chunk_results);
        }

        Ok(results)
    }
}
