//! Activity log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Kind of recorded action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Login,
    ScanFound,
    ScanNotFound,
    Admin,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Login => "LOGIN",
            ActivityType::ScanFound => "SCAN_FOUND",
            ActivityType::ScanNotFound => "SCAN_NOT_FOUND",
            ActivityType::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LOGIN" => Some(ActivityType::Login),
            "SCAN_FOUND" => Some(ActivityType::ScanFound),
            "SCAN_NOT_FOUND" => Some(ActivityType::ScanNotFound),
            "ADMIN" => Some(ActivityType::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored log entry. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityLog {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub user: String,
    pub details: String,
    /// Client device descriptor plus request origin, e.g. `PC/Desktop (Linux) | IP: 10.0.0.7`
    pub device: String,
    pub timestamp: DateTime<Utc>,
}

/// An event on its way to the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub action_type: ActivityType,
    #[validate(length(min = 1, message = "User name is required"))]
    #[schema(example = "Somchai Jaidee")]
    pub user_name: String,
    #[schema(example = "Scanned: Drinking Water 600ml (FG-001)")]
    pub details: String,
    #[schema(example = "PC/Desktop (Windows)")]
    pub device: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_wire_names() {
        for kind in [
            ActivityType::Login,
            ActivityType::ScanFound,
            ActivityType::ScanNotFound,
            ActivityType::Admin,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
            assert_eq!(ActivityType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ActivityType::parse("LOGOUT"), None);
    }
}
