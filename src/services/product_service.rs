//! Product service - catalog maintenance.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Product, ProductChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Whole catalog, newest first
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Add a product; conflict if the item code or barcode is taken.
    /// Returns the new row id.
    async fn create_product(&self, product: Product) -> AppResult<i32>;

    async fn update_product(&self, item_code: &str, changes: ProductChanges) -> AppResult<Product>;

    async fn delete_product(&self, item_code: &str) -> AppResult<()>;

    /// Remove the entire catalog, returning how many products were removed
    async fn delete_all_products(&self) -> AppResult<u64>;
}

/// Concrete implementation of ProductService using Unit of Work.
///
/// Uniqueness is checked read-then-write. Two concurrent creates can both
/// pass the check; the unique indexes then reject the second insert, which
/// surfaces as the same conflict error.
pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProductService for ProductManager<U> {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.uow.products().list().await
    }

    async fn create_product(&self, product: Product) -> AppResult<i32> {
        let products = self.uow.products();

        if products
            .find_by_item_code(&product.item_code)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Item Code \"{}\"",
                product.item_code
            )));
        }

        if products.find_by_barcode(&product.barcode).await?.is_some() {
            return Err(AppError::conflict(format!("Barcode \"{}\"", product.barcode)));
        }

        let item_code = product.item_code.clone();
        let id = products.create(product).await?;
        tracing::debug!(%item_code, id, "Product created");
        Ok(id)
    }

    async fn update_product(&self, item_code: &str, changes: ProductChanges) -> AppResult<Product> {
        if changes.item_name.is_none() && changes.barcode.is_none() {
            return Err(AppError::validation("No fields to update"));
        }

        let products = self.uow.products();

        if let Some(barcode) = changes.barcode.as_deref() {
            if let Some(owner) = products.find_by_barcode(barcode).await? {
                if owner.item_code != item_code {
                    return Err(AppError::conflict(format!("Barcode \"{}\"", barcode)));
                }
            }
        }

        products.update(item_code, changes).await
    }

    async fn delete_product(&self, item_code: &str) -> AppResult<()> {
        let removed = self.uow.products().delete(item_code).await?;
        if removed == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn delete_all_products(&self) -> AppResult<u64> {
        let removed = self.uow.products().delete_all().await?;
        tracing::warn!(removed, "Entire product catalog deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockProductRepository;
    use crate::services::test_support::TestUnitOfWork;
    use mockall::predicate::eq;

    fn water() -> Product {
        Product::new("FG-001", "Drinking Water 600ml", "8851234567890")
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_item_code() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_item_code()
            .with(eq("FG-001"))
            .returning(|_| Ok(Some(water())));
        repo.expect_create().never();

        let service = ProductManager::new(Arc::new(TestUnitOfWork::with_products(repo)));
        let err = service.create_product(water()).await.unwrap_err();

        assert_eq!(err.to_string(), "Item Code \"FG-001\" already exists");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_barcode() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_item_code().returning(|_| Ok(None));
        repo.expect_find_by_barcode()
            .with(eq("8851234567890"))
            .returning(|_| Ok(Some(water())));
        repo.expect_create().never();

        let service = ProductManager::new(Arc::new(TestUnitOfWork::with_products(repo)));
        let candidate = Product::new("FG-002", "Other", "8851234567890");
        let err = service.create_product(candidate).await.unwrap_err();

        assert_eq!(err.to_string(), "Barcode \"8851234567890\" already exists");
    }

    #[tokio::test]
    async fn test_create_returns_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_item_code().returning(|_| Ok(None));
        repo.expect_find_by_barcode().returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|_| Ok(42));

        let service = ProductManager::new(Arc::new(TestUnitOfWork::with_products(repo)));
        assert_eq!(service.create_product(water()).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_update_barcode_taken_by_other_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_barcode()
            .returning(|_| Ok(Some(Product::new("FG-009", "Soap", "111"))));
        repo.expect_update().never();

        let service = ProductManager::new(Arc::new(TestUnitOfWork::with_products(repo)));
        let changes = ProductChanges {
            item_name: None,
            barcode: Some("111".to_string()),
        };

        assert!(service
            .update_product("FG-001", changes)
            .await
            .unwrap_err()
            .is_conflict());
    }

    #[tokio::test]
    async fn test_update_keeping_own_barcode() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_barcode()
            .returning(|_| Ok(Some(water())));
        repo.expect_update()
            .times(1)
            .returning(|_, changes| {
                let mut product = water();
                if let Some(name) = changes.item_name {
                    product.item_name = name;
                }
                Ok(product)
            });

        let service = ProductManager::new(Arc::new(TestUnitOfWork::with_products(repo)));
        let changes = ProductChanges {
            item_name: Some("Drinking Water 1.5L".to_string()),
            barcode: Some("8851234567890".to_string()),
        };

        let updated = service.update_product("FG-001", changes).await.unwrap();
        assert_eq!(updated.item_name, "Drinking Water 1.5L");
    }
}
