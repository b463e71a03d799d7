//! Product repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{Product, ProductChanges};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List the whole catalog, newest first
    async fn list(&self) -> AppResult<Vec<Product>>;

    async fn find_by_item_code(&self, item_code: &str) -> AppResult<Option<Product>>;

    async fn find_by_barcode(&self, barcode: &str) -> AppResult<Option<Product>>;

    /// Insert a product and return its row id
    async fn create(&self, product: Product) -> AppResult<i32>;

    /// Apply a partial update to the product with this item code
    async fn update(&self, item_code: &str, changes: ProductChanges) -> AppResult<Product>;

    /// Delete one product, returning the number of removed rows
    async fn delete(&self, item_code: &str) -> AppResult<u64>;

    /// Remove every product
    async fn delete_all(&self) -> AppResult<u64>;
}

/// SeaORM-backed ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, item_code: &str) -> AppResult<Option<product::Model>> {
        ProductEntity::find()
            .filter(product::Column::ItemCode.eq(item_code))
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_desc(product::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_item_code(&self, item_code: &str) -> AppResult<Option<Product>> {
        Ok(self.find_model(item_code).await?.map(Product::from))
    }

    async fn find_by_barcode(&self, barcode: &str) -> AppResult<Option<Product>> {
        let model = ProductEntity::find()
            .filter(product::Column::Barcode.eq(barcode))
            .one(&self.db)
            .await?;

        Ok(model.map(Product::from))
    }

    async fn create(&self, product: Product) -> AppResult<i32> {
        let label = format!("Item Code \"{}\" or barcode \"{}\"", product.item_code, product.barcode);
        let active_model = ActiveModel {
            item_code: Set(product.item_code),
            item_name: Set(product.item_name),
            barcode: Set(product.barcode),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, label))?;
        Ok(model.id)
    }

    async fn update(&self, item_code: &str, changes: ProductChanges) -> AppResult<Product> {
        let model = self
            .find_model(item_code)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = model.into();
        let mut label = format!("Item Code \"{}\"", item_code);

        if let Some(item_name) = changes.item_name {
            active.item_name = Set(item_name);
        }
        if let Some(barcode) = changes.barcode {
            label = format!("Barcode \"{}\"", barcode);
            active.barcode = Set(barcode);
        }

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, label))?;
        Ok(Product::from(model))
    }

    async fn delete(&self, item_code: &str) -> AppResult<u64> {
        let result = ProductEntity::delete_many()
            .filter(product::Column::ItemCode.eq(item_code))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = ProductEntity::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
