//! Domain layer - Core business entities
//!
//! Users, catalog products, activity log entries and the branding config,
//! independent of how they are persisted or transported.

pub mod activity;
pub mod app_config;
pub mod password;
pub mod product;
pub mod user;

pub use activity::{ActivityLog, ActivityType, NewActivity};
pub use app_config::{AppConfig, AppConfigChanges};
pub use password::Password;
pub use product::{Product, ProductChanges};
pub use user::{NewUser, User, UserChanges, UserResponse, UserRole};
