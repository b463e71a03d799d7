//! Activity log repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};

use super::entities::activity_log::{self, ActiveModel, Entity as LogEntity};
use crate::domain::{ActivityLog, NewActivity};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Activity log repository. Entries are append-only; the only removal is
/// clearing the whole table.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Most recent entries first, at most `limit`
    async fn list_recent(&self, limit: u64) -> AppResult<Vec<ActivityLog>>;

    /// Append one entry; `device` must already carry the client address
    async fn append(&self, entry: NewActivity, device: String) -> AppResult<ActivityLog>;

    /// Remove every entry
    async fn clear(&self) -> AppResult<u64>;
}

/// SeaORM-backed LogRepository
pub struct LogStore {
    db: DatabaseConnection,
}

impl LogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogRepository for LogStore {
    async fn list_recent(&self, limit: u64) -> AppResult<Vec<ActivityLog>> {
        let models = LogEntity::find()
            .order_by_desc(activity_log::Column::Timestamp)
            .order_by_desc(activity_log::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(activity_log::Model::into_domain).collect())
    }

    async fn append(&self, entry: NewActivity, device: String) -> AppResult<ActivityLog> {
        let active_model = ActiveModel {
            action_type: Set(entry.action_type.as_str().to_string()),
            user_name: Set(entry.user_name),
            details: Set(entry.details),
            device: Set(device),
            timestamp: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(model.into_domain())
    }

    async fn clear(&self) -> AppResult<u64> {
        let result = LogEntity::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
