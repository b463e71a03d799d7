//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{
    BYPASS_DEPARTMENT, BYPASS_EMPLOYEE_ID, BYPASS_FIRST_NAME, BYPASS_LAST_NAME, ROLE_ADMIN,
    ROLE_STAFF,
};

/// User roles. Only `admin` unlocks the admin screens; anything else is staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Staff,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::Staff,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Staff => write!(f, "{}", ROLE_STAFF),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    /// Four-digit employee id, also the login PIN
    pub employee_id: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// "First Last", as written into activity logs
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data for a new user, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub employee_id: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: UserRole,
    pub password_hash: String,
}

/// Partial user update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub role: Option<UserRole>,
    pub password_hash: Option<String>,
}

/// User as returned by the list endpoint (never carries the password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Employee id
    #[schema(example = "1024")]
    pub id: String,
    #[schema(example = "Mr.")]
    pub title: String,
    #[schema(example = "Somchai")]
    pub first_name: String,
    #[schema(example = "Jaidee")]
    pub last_name: String,
    #[schema(example = "Warehouse")]
    pub department: String,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.employee_id,
            title: user.title,
            first_name: user.first_name,
            last_name: user.last_name,
            department: user.department,
            role: user.role,
        }
    }
}

impl UserResponse {
    /// The built-in administrator that the scan station lets in offline.
    pub fn bypass_admin() -> Self {
        Self {
            id: BYPASS_EMPLOYEE_ID.to_string(),
            title: String::new(),
            first_name: BYPASS_FIRST_NAME.to_string(),
            last_name: BYPASS_LAST_NAME.to_string(),
            department: BYPASS_DEPARTMENT.to_string(),
            role: UserRole::Admin,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_defaults_to_staff() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("staff"), UserRole::Staff);
        assert_eq!(UserRole::from(""), UserRole::Staff);
        assert_eq!(UserRole::from("manager"), UserRole::Staff);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::Staff.to_string(), "staff");
    }

    #[test]
    fn test_bypass_admin() {
        let admin = UserResponse::bypass_admin();
        assert_eq!(admin.id, "9999");
        assert!(admin.is_admin());
        assert_eq!(admin.display_name(), "Super Admin");
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let json = serde_json::to_value(UserResponse::bypass_admin()).unwrap();
        assert_eq!(json["firstName"], "Super");
        assert_eq!(json["role"], "admin");
        assert!(json.get("password").is_none());
    }
}
