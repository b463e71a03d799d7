//! Fire-and-forget activity recording for the scan station.
//!
//! `record` never blocks the caller. Each entry is written on its own
//! task; a failed write is reported on the warning channel and dropped.
//! `flush` waits for the writes still in flight, e.g. before shutdown.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::GUEST_USER_NAME;
use crate::domain::{ActivityType, NewActivity, UserResponse};
use crate::errors::AppResult;
use crate::services::LogService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Where recorded activity ends up
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ActivitySink: Send + Sync {
    async fn submit(&self, entry: NewActivity) -> AppResult<()>;
}

/// Sink writing into the log service of this process
pub struct LogServiceSink {
    logs: Arc<dyn LogService>,
    origin: Option<String>,
}

impl LogServiceSink {
    /// `origin` is stored as the entry's IP part
    pub fn new(logs: Arc<dyn LogService>, origin: Option<String>) -> Self {
        Self { logs, origin }
    }
}

#[async_trait]
impl ActivitySink for LogServiceSink {
    async fn submit(&self, entry: NewActivity) -> AppResult<()> {
        self.logs.record(entry, self.origin.clone()).await?;
        Ok(())
    }
}

/// Coarse device descriptor from a user agent string,
/// e.g. `Mobile (Android)` or `PC/Desktop (Windows)`.
pub fn describe_device(user_agent: &str) -> String {
    let lower = user_agent.to_lowercase();

    let mut device = if lower.contains("mobi") || lower.contains("android") {
        "Mobile".to_string()
    } else if lower.contains("ipad") || lower.contains("tablet") {
        "Tablet".to_string()
    } else {
        "PC/Desktop".to_string()
    };

    let os_hint = [
        ("Win", "Windows"),
        ("Mac", "Mac"),
        ("Linux", "Linux"),
        ("iPhone", "iPhone"),
        ("Android", "Android"),
    ]
    .into_iter()
    .find(|(marker, _)| user_agent.contains(marker));

    if let Some((_, os)) = os_hint {
        device.push_str(&format!(" ({})", os));
    }

    device
}

/// User agent for a station running this binary
pub fn station_user_agent() -> String {
    let platform = match std::env::consts::OS {
        "windows" => "Windows NT",
        "macos" => "Macintosh; Mac OS X",
        "linux" => "X11; Linux",
        other => other,
    };
    format!("sku-scan/{} ({})", env!("CARGO_PKG_VERSION"), platform)
}

/// Submits activity entries without waiting on them
#[derive(Clone)]
pub struct ActivityRecorder {
    sink: Arc<dyn ActivitySink>,
    device: String,
    warnings: mpsc::UnboundedSender<String>,
    in_flight: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl ActivityRecorder {
    /// Returns the recorder and the receiving end of its warning channel
    pub fn new(sink: Arc<dyn ActivitySink>, device: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (warnings, rx) = mpsc::unbounded_channel();
        let recorder = Self {
            sink,
            device: device.into(),
            warnings,
            in_flight: Arc::default(),
        };
        (recorder, rx)
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    /// Record on a detached task
    pub fn record(&self, kind: ActivityType, actor: Option<&UserResponse>, details: impl Into<String>) {
        let entry = NewActivity {
            action_type: kind,
            user_name: actor
                .map(UserResponse::display_name)
                .unwrap_or_else(|| GUEST_USER_NAME.to_string()),
            details: details.into(),
            device: Some(self.device.clone()),
        };

        let sink = self.sink.clone();
        let warnings = self.warnings.clone();

        let handle = tokio::spawn(async move {
            if let Err(e) = sink.submit(entry).await {
                tracing::warn!(%kind, error = %e, "Failed to save activity log");
                // nobody listening is fine
                let _ = warnings.send(format!("Failed to save log: {}", e));
            }
        });

        let mut in_flight = self.in_flight();
        in_flight.retain(|task| !task.is_finished());
        in_flight.push(handle);
    }

    /// Wait for every write started so far
    pub async fn flush(&self) {
        let pending = std::mem::take(&mut *self.in_flight());
        for task in pending {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Activity log task did not finish");
            }
        }
    }

    fn in_flight(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
