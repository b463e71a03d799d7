//! Log service - append-only activity log.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{LOG_LIST_LIMIT, UNKNOWN_DEVICE, UNKNOWN_IP};
use crate::domain::{ActivityLog, NewActivity};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Log service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LogService: Send + Sync {
    /// Most recent entries, newest first
    async fn list_logs(&self) -> AppResult<Vec<ActivityLog>>;

    /// Append an entry. `client_ip` is where the request came from.
    async fn record(&self, entry: NewActivity, client_ip: Option<String>) -> AppResult<ActivityLog>;

    /// Truncate the log, returning how many entries were removed
    async fn clear_logs(&self) -> AppResult<u64>;
}

/// Concrete implementation of LogService using Unit of Work.
pub struct LogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Stored device column: `"{device} | IP: {ip}"`
pub fn device_with_origin(device: Option<&str>, client_ip: Option<&str>) -> String {
    let device = device
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(UNKNOWN_DEVICE);
    let ip = client_ip
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN_IP);

    format!("{} | IP: {}", device, ip)
}

#[async_trait]
impl<U: UnitOfWork> LogService for LogManager<U> {
    async fn list_logs(&self) -> AppResult<Vec<ActivityLog>> {
        self.uow.logs().list_recent(LOG_LIST_LIMIT).await
    }

    async fn record(&self, entry: NewActivity, client_ip: Option<String>) -> AppResult<ActivityLog> {
        let device = device_with_origin(entry.device.as_deref(), client_ip.as_deref());
        self.uow.logs().append(entry, device).await
    }

    async fn clear_logs(&self) -> AppResult<u64> {
        let removed = self.uow.logs().clear().await?;
        tracing::info!(removed, "Activity log cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityType;
    use crate::infra::MockLogRepository;
    use crate::services::test_support::TestUnitOfWork;
    use chrono::Utc;
    use mockall::predicate::{always, eq};

    #[test]
    fn test_device_with_origin() {
        assert_eq!(
            device_with_origin(Some("Mobile (Android)"), Some("10.0.0.7")),
            "Mobile (Android) | IP: 10.0.0.7"
        );
        assert_eq!(device_with_origin(None, None), "Unknown | IP: Unknown IP");
        assert_eq!(device_with_origin(Some("  "), Some("")), "Unknown | IP: Unknown IP");
    }

    #[tokio::test]
    async fn test_record_appends_origin() {
        let mut repo = MockLogRepository::new();
        repo.expect_append()
            .with(always(), eq("PC/Desktop (Linux) | IP: 192.168.1.20".to_string()))
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

        let service = LogManager::new(Arc::new(TestUnitOfWork::with_logs(repo)));
        let entry = NewActivity {
            action_type: ActivityType::Login,
            user_name: "Malee Suksan".to_string(),
            details: "Logged in successfully".to_string(),
            device: Some("PC/Desktop (Linux)".to_string()),
        };

        let log = service
            .record(entry, Some("192.168.1.20".to_string()))
            .await
            .unwrap();
        assert_eq!(log.kind, ActivityType::Login);
    }

    #[tokio::test]
    async fn test_list_uses_limit() {
        let mut repo = MockLogRepository::new();
        repo.expect_list_recent()
            .with(eq(LOG_LIST_LIMIT))
            .returning(|_| Ok(Vec::new()));

        let service = LogManager::new(Arc::new(TestUnitOfWork::with_logs(repo)));
        assert!(service.list_logs().await.unwrap().is_empty());
    }
}
