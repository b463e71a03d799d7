//! Scan station against the real services on an in-memory database.

use std::sync::Arc;
use std::time::{Duration, Instant};

use sku_scan::config::Config;
use sku_scan::domain::{ActivityType, Product};
use sku_scan::errors::AppError;
use sku_scan::infra::Database;
use sku_scan::scanner::{ActivityRecorder, LogServiceSink, ScanDetector, ScanSession};
use sku_scan::services::{CreateUserInput, ServiceContainer, Services};

async fn services() -> Services {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    Services::from_connection(db.get_connection(), &Config::default())
}

fn session(services: &Services) -> ScanSession {
    let sink = Arc::new(LogServiceSink::new(services.logs(), Some("127.0.0.1".into())));
    let (recorder, _warnings) = ActivityRecorder::new(sink, "PC/Desktop (Linux)");
    ScanSession::new(
        services.auth(),
        services.products(),
        recorder,
        ScanDetector::default(),
    )
}

fn scan(session: &mut ScanSession, barcode: &str) -> Option<sku_scan::scanner::ScanResult> {
    let start = Instant::now();
    for (i, key) in barcode.chars().enumerate() {
        session.handle_key(&key.to_string(), start + Duration::from_millis(i as u64 * 10));
    }
    let end = start + Duration::from_millis(barcode.len() as u64 * 10);
    session.handle_key("Enter", end)
}

#[tokio::test]
async fn test_bypass_login_is_local_and_unlogged() {
    let services = services().await;
    let mut station = session(&services);

    let user = station.login("9999", "").await.unwrap();
    assert_eq!(user.id, "9999");
    assert_eq!(user.first_name, "Super");

    station.flush_activity().await;
    assert!(services.logs().list_logs().await.unwrap().is_empty());
    assert!(services.users().list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_and_scans_are_recorded() {
    let services = services().await;
    services
        .users()
        .create_user(CreateUserInput {
            employee_id: "1024".into(),
            title: "Mr.".into(),
            first_name: "Somchai".into(),
            last_name: "Jaidee".into(),
            department: "Warehouse".into(),
            role: None,
            password: Some("secret1".into()),
        })
        .await
        .unwrap();
    services
        .products()
        .create_product(Product::new("FG-001", "Drinking Water 600ml", "8851234567890"))
        .await
        .unwrap();

    let mut station = session(&services);
    assert_eq!(station.reload_catalog().await.unwrap(), 1);

    station.login("1024", "secret1").await.unwrap();

    let found = scan(&mut station, "8851234567890").unwrap();
    assert!(found.found);
    assert_eq!(found.item_code, "FG-001");

    let missing = scan(&mut station, "0000000").unwrap();
    assert!(!missing.found);
    assert_eq!(missing.item_name, "Unknown Item");

    let history: Vec<_> = station.history().map(|h| h.barcode.clone()).collect();
    assert_eq!(history, vec!["0000000", "8851234567890"]);

    // log writes run detached
    station.flush_activity().await;
    let logs = services.logs().list_logs().await.unwrap();
    assert_eq!(logs.len(), 3);
    assert!(logs.iter().all(|log| log.user == "Somchai Jaidee"));
    assert!(logs
        .iter()
        .all(|log| log.device == "PC/Desktop (Linux) | IP: 127.0.0.1"));

    let kinds: Vec<_> = logs.iter().map(|log| log.kind).collect();
    assert!(kinds.contains(&ActivityType::Login));
    assert!(kinds.contains(&ActivityType::ScanFound));
    assert!(kinds.contains(&ActivityType::ScanNotFound));

    let found_log = logs
        .iter()
        .find(|log| log.kind == ActivityType::ScanFound)
        .unwrap();
    assert_eq!(found_log.details, "Scanned: Drinking Water 600ml (FG-001)");
}

#[tokio::test]
async fn test_wrong_password_keeps_station_logged_out() {
    let services = services().await;
    services
        .users()
        .create_user(CreateUserInput {
            employee_id: "1024".into(),
            title: String::new(),
            first_name: "Somchai".into(),
            last_name: String::new(),
            department: String::new(),
            role: None,
            password: Some("secret1".into()),
        })
        .await
        .unwrap();

    let mut station = session(&services);
    let err = station.login("1024", "nope").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
    assert!(station.current_user().is_none());
}
