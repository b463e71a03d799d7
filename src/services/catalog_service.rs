//! Catalog service - bulk product import and export.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::container::batch;
use super::{LogService, ProductService};
use crate::domain::{ActivityType, NewActivity, Product};
use crate::errors::{AppError, AppResult};
use crate::utils::csv::{parse_catalog, write_catalog};

/// Outcome of a catalog import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImportSummary {
    pub imported: usize,
    /// Rows rejected by the store, duplicates included
    pub failed: usize,
    /// Rows missing a field; never sent to the store
    pub skipped: usize,
}

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Import a CSV catalog on behalf of `actor`
    async fn import_csv(&self, text: &str, actor: &str) -> AppResult<ImportSummary>;

    /// Create products in batches; concurrent inside a batch, batches in order
    async fn import_products(&self, products: Vec<Product>, actor: &str) -> AppResult<ImportSummary>;

    /// Whole catalog as CSV
    async fn export_csv(&self) -> AppResult<String>;
}

/// Concrete implementation of CatalogService on top of the product and
/// log services.
pub struct CatalogManager {
    products: Arc<dyn ProductService>,
    logs: Arc<dyn LogService>,
    batch_size: usize,
}

impl CatalogManager {
    pub fn new(
        products: Arc<dyn ProductService>,
        logs: Arc<dyn LogService>,
        batch_size: usize,
    ) -> Self {
        Self {
            products,
            logs,
            batch_size,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn import_csv(&self, text: &str, actor: &str) -> AppResult<ImportSummary> {
        let sheet = parse_catalog(text)?;
        let mut summary = self.import_products(sheet.products, actor).await?;
        summary.skipped = sheet.skipped;
        Ok(summary)
    }

    async fn import_products(&self, products: Vec<Product>, actor: &str) -> AppResult<ImportSummary> {
        let outcomes = batch::process(products, self.batch_size, |product| {
            let service = self.products.clone();
            async move {
                let item_code = product.item_code.clone();
                match service.create_product(product).await {
                    Ok(_) => Ok::<bool, AppError>(true),
                    Err(e) => {
                        tracing::debug!(%item_code, error = %e, "Import row rejected");
                        Ok(false)
                    }
                }
            }
        })
        .await?;

        let imported = outcomes.iter().filter(|ok| **ok).count();
        let summary = ImportSummary {
            imported,
            failed: outcomes.len() - imported,
            skipped: 0,
        };

        let entry = NewActivity {
            action_type: ActivityType::Admin,
            user_name: actor.to_string(),
            details: format!(
                "Imported products: {} success, {} failed",
                summary.imported, summary.failed
            ),
            device: None,
        };
        if let Err(e) = self.logs.record(entry, None).await {
            tracing::warn!(error = %e, "Failed to record import in activity log");
        }

        tracing::info!(
            imported = summary.imported,
            failed = summary.failed,
            "Catalog import finished"
        );
        Ok(summary)
    }

    async fn export_csv(&self) -> AppResult<String> {
        let products = self.products.list_products().await?;
        Ok(write_catalog(&products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityLog;
    use crate::infra::{MockLogRepository, MockProductRepository};
    use crate::services::test_support::TestUnitOfWork;
    use crate::services::{LogManager, ProductManager};
    use chrono::Utc;

    fn catalog(products: MockProductRepository, logs: MockLogRepository) -> CatalogManager {
        let uow = Arc::new(TestUnitOfWork::with_products(products).and_logs(logs));
        CatalogManager::new(
            Arc::new(ProductManager::new(uow.clone())),
            Arc::new(LogManager::new(uow)),
            2,
        )
    }

    #[tokio::test]
    async fn test_import_counts_duplicates_and_skips() {
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_item_code()
            .returning(|code| Ok((code == "FG-002").then(|| Product::new("FG-002", "Old", "1"))));
        products.expect_find_by_barcode().returning(|_| Ok(None));
        products.expect_create().times(2).returning(|_| Ok(1));

        let mut logs = MockLogRepository::new();
        logs.expect_append()
            .withf(|entry, _| {
                entry.action_type == ActivityType::Admin
                    && entry.details == "Imported products: 2 success, 1 failed"
            })
            .times(1)
            .returning(|entry, device| {
                Ok(ActivityLog {
                    id: 1,
                    kind: entry.action_type,
                    user: entry.user_name,
                    details: entry.details,
                    device,
                    timestamp: Utc::now(),
                })
            });

        let text = "itemCode,itemName,barcode\n\
                    FG-001,Water,885001\n\
                    FG-002,Rice,885002\n\
                    FG-003,Soap,885003\n\
                    FG-004,,885004\n";

        let summary = catalog(products, logs)
            .import_csv(text, "Super Admin")
            .await
            .unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                imported: 2,
                failed: 1,
                skipped: 1
            }
        );
    }

    #[tokio::test]
    async fn test_export_writes_header_and_rows() {
        let mut products = MockProductRepository::new();
        products
            .expect_list()
            .returning(|| Ok(vec![Product::new("FG-001", "Water", "885001")]));

        let text = catalog(products, MockLogRepository::new())
            .export_csv()
            .await
            .unwrap();

        assert_eq!(text, "itemCode,itemName,barcode\nFG-001,Water,885001\n");
    }
}
