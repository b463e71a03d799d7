//! Scan station state.
//!
//! One `ScanSession` holds everything the station shows: who is logged in,
//! the catalog copy scans are matched against, the last result and the
//! recent scan history. Every user action is a method on it.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use super::detector::ScanDetector;
use super::lookup::{clean_barcode, find_by_barcode};
use super::recorder::ActivityRecorder;
use crate::config::{BYPASS_EMPLOYEE_ID, SCAN_HISTORY_LIMIT, UNKNOWN_ITEM_NAME};
use crate::domain::{ActivityType, Product, UserResponse};
use crate::errors::AppResult;
use crate::services::{AuthService, ProductService};

/// What the station shows after a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub found: bool,
    /// The scanned barcode when nothing matched
    pub item_code: String,
    pub item_name: String,
    pub barcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub scanned_at: DateTime<Utc>,
    pub barcode: String,
    pub found: bool,
    pub item_name: Option<String>,
}

pub struct ScanSession {
    auth: Arc<dyn AuthService>,
    products: Arc<dyn ProductService>,
    recorder: ActivityRecorder,
    detector: ScanDetector,
    catalog: Vec<Product>,
    user: Option<UserResponse>,
    last_result: Option<ScanResult>,
    history: VecDeque<HistoryEntry>,
}

impl ScanSession {
    pub fn new(
        auth: Arc<dyn AuthService>,
        products: Arc<dyn ProductService>,
        recorder: ActivityRecorder,
        detector: ScanDetector,
    ) -> Self {
        Self {
            auth,
            products,
            recorder,
            detector,
            catalog: Vec::new(),
            user: None,
            last_result: None,
            history: VecDeque::with_capacity(SCAN_HISTORY_LIMIT),
        }
    }

    /// Log in. The built-in `9999` administrator is let in locally without
    /// asking the backend, and that login is not recorded.
    pub async fn login(&mut self, employee_id: &str, password: &str) -> AppResult<UserResponse> {
        let employee_id = employee_id.trim();

        if employee_id == BYPASS_EMPLOYEE_ID {
            tracing::info!("Bypass administrator logged in");
            let admin = UserResponse::bypass_admin();
            self.user = Some(admin.clone());
            return Ok(admin);
        }

        let user = UserResponse::from(self.auth.login(employee_id, password).await?);
        self.recorder
            .record(ActivityType::Login, Some(&user), "Logged in successfully");

        self.user = Some(user.clone());
        Ok(user)
    }

    /// Back to the login screen; the scan screen state goes with it
    pub fn logout(&mut self) {
        self.user = None;
        self.last_result = None;
        self.history.clear();
        self.detector.reset();
    }

    /// Fetch the catalog again. Returns the number of products held.
    pub async fn reload_catalog(&mut self) -> AppResult<usize> {
        let products = self.products.list_products().await?;
        Ok(self.load_catalog(products))
    }

    pub fn load_catalog(&mut self, products: Vec<Product>) -> usize {
        self.catalog = products;
        tracing::debug!(count = self.catalog.len(), "Catalog loaded");
        self.catalog.len()
    }

    /// Feed a scanner keystroke
    pub fn handle_key(&mut self, key: &str, at: Instant) -> Option<ScanResult> {
        let barcode = self.detector.push(key, at)?;
        self.scan(&barcode)
    }

    /// Barcode typed into the manual entry box
    pub fn submit_manual(&mut self, input: &str) -> Option<ScanResult> {
        self.scan(input)
    }

    fn scan(&mut self, input: &str) -> Option<ScanResult> {
        let barcode = clean_barcode(input)?.to_string();

        let result = match find_by_barcode(&self.catalog, &barcode) {
            Some(product) => ScanResult {
                found: true,
                item_code: product.item_code.clone(),
                item_name: product.item_name.clone(),
                barcode: barcode.clone(),
            },
            None => ScanResult {
                found: false,
                item_code: barcode.clone(),
                item_name: UNKNOWN_ITEM_NAME.to_string(),
                barcode: barcode.clone(),
            },
        };

        let (kind, details) = if result.found {
            (
                ActivityType::ScanFound,
                format!("Scanned: {} ({})", result.item_name, result.item_code),
            )
        } else {
            (
                ActivityType::ScanNotFound,
                format!("Barcode not found: {}", barcode),
            )
        };
        self.recorder.record(kind, self.user.as_ref(), details);

        self.history.push_front(HistoryEntry {
            scanned_at: Utc::now(),
            barcode,
            found: result.found,
            item_name: result.found.then(|| result.item_name.clone()),
        });
        self.history.truncate(SCAN_HISTORY_LIMIT);

        self.last_result = Some(result.clone());
        Some(result)
    }

    /// Close the result popup
    pub fn dismiss_result(&mut self) {
        self.last_result = None;
    }

    pub fn current_user(&self) -> Option<&UserResponse> {
        self.user.as_ref()
    }

    pub fn last_result(&self) -> Option<&ScanResult> {
        self.last_result.as_ref()
    }

    /// Newest first, at most `SCAN_HISTORY_LIMIT` entries
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Wait until recorded activity has been written
    pub async fn flush_activity(&self) {
        self.recorder.flush().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserRole};
    use crate::errors::AppError;
    use crate::scanner::recorder::MockActivitySink;
    use crate::services::{MockAuthService, MockProductService};
    use std::time::Duration;

    fn session(auth: MockAuthService, sink: MockActivitySink) -> ScanSession {
        let (recorder, _warnings) = ActivityRecorder::new(Arc::new(sink), "PC/Desktop (Linux)");
        let mut session = ScanSession::new(
            Arc::new(auth),
            Arc::new(MockProductService::new()),
            recorder,
            ScanDetector::new(Duration::from_millis(100), 3),
        );
        session.load_catalog(vec![Product::new(
            "FG-001",
            "Drinking Water 600ml",
            "8851234567890",
        )]);
        session
    }

    fn staff() -> User {
        User {
            employee_id: "1024".to_string(),
            title: "Ms.".to_string(),
            first_name: "Malee".to_string(),
            last_name: "Suksan".to_string(),
            department: "Warehouse".to_string(),
            role: UserRole::Staff,
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_bypass_login_is_local() {
        let mut auth = MockAuthService::new();
        auth.expect_login().never();
        let mut sink = MockActivitySink::new();
        sink.expect_submit().never();

        let mut session = session(auth, sink);
        let user = session.login("9999", "").await.unwrap();

        assert!(user.is_admin());
        assert_eq!(user.display_name(), "Super Admin");
        assert_eq!(session.current_user(), Some(&user));
    }

    #[tokio::test]
    async fn test_login_records_activity() {
        let mut auth = MockAuthService::new();
        auth.expect_login()
            .times(1)
            .returning(|_, _| Ok(staff()));
        let mut sink = MockActivitySink::new();
        sink.expect_submit()
            .withf(|entry| {
                entry.action_type == ActivityType::Login
                    && entry.user_name == "Malee Suksan"
                    && entry.details == "Logged in successfully"
            })
            .returning(|_| Ok(()));

        let mut session = session(auth, sink);
        let user = session.login("1024", "1234").await.unwrap();
        session.flush_activity().await;

        assert_eq!(user.id, "1024");
        assert!(!user.is_admin());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_station_logged_out() {
        let mut auth = MockAuthService::new();
        auth.expect_login()
            .returning(|_, _| Err(AppError::InvalidCredentials));

        let mut session = session(auth, MockActivitySink::new());
        assert!(session.login("1024", "0000").await.is_err());
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_keystrokes_resolve_product() {
        let mut sink = MockActivitySink::new();
        sink.expect_submit()
            .withf(|entry| entry.details == "Scanned: Drinking Water 600ml (FG-001)")
            .returning(|_| Ok(()));

        let mut session = session(MockAuthService::new(), sink);
        let mut at = Instant::now();
        for c in "8851234567890".chars() {
            assert!(session.handle_key(&c.to_string(), at).is_none());
            at += Duration::from_millis(5);
        }

        let result = session.handle_key("Enter", at).unwrap();
        session.flush_activity().await;

        assert!(result.found);
        assert_eq!(result.item_code, "FG-001");
        assert_eq!(session.last_result(), Some(&result));

        session.dismiss_result();
        assert!(session.last_result().is_none());
        assert_eq!(session.history().count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_barcode() {
        let mut sink = MockActivitySink::new();
        sink.expect_submit()
            .withf(|entry| {
                entry.action_type == ActivityType::ScanNotFound
                    && entry.user_name == "Guest"
                    && entry.details == "Barcode not found: 000111"
            })
            .returning(|_| Ok(()));

        let mut session = session(MockAuthService::new(), sink);
        let result = session.submit_manual("  000111 ").unwrap();
        session.flush_activity().await;

        assert!(!result.found);
        assert_eq!(result.item_code, "000111");
        assert_eq!(result.item_name, "Unknown Item");

        let entry = session.history().next().unwrap();
        assert_eq!(entry.item_name, None);
    }

    #[tokio::test]
    async fn test_blank_manual_entry_ignored() {
        let mut sink = MockActivitySink::new();
        sink.expect_submit().never();

        let mut session = session(MockAuthService::new(), sink);
        assert!(session.submit_manual("   ").is_none());
        assert_eq!(session.history().count(), 0);
    }

    #[tokio::test]
    async fn test_history_is_capped_newest_first() {
        let mut sink = MockActivitySink::new();
        sink.expect_submit().returning(|_| Ok(()));

        let mut session = session(MockAuthService::new(), sink);
        for i in 0..60 {
            session.submit_manual(&format!("BC{i:03}"));
        }

        assert_eq!(session.history().count(), SCAN_HISTORY_LIMIT);
        assert_eq!(session.history().next().unwrap().barcode, "BC059");

        session.logout();
        assert_eq!(session.history().count(), 0);
        assert!(session.last_result().is_none());
    }

    #[tokio::test]
    async fn test_reload_catalog() {
        let mut products = MockProductService::new();
        products.expect_list_products().returning(|| {
            Ok(vec![
                Product::new("FG-001", "Water", "1001"),
                Product::new("FG-002", "Rice", "1002"),
            ])
        });

        let (recorder, _warnings) =
            ActivityRecorder::new(Arc::new(MockActivitySink::new()), "PC/Desktop");
        let mut session = ScanSession::new(
            Arc::new(MockAuthService::new()),
            Arc::new(products),
            recorder,
            ScanDetector::default(),
        );

        assert_eq!(session.reload_catalog().await.unwrap(), 2);
        assert_eq!(session.catalog_len(), 2);
    }
}
