//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! Repository access goes through the Unit of Work.

mod auth_service;
mod catalog_service;
mod config_service;
pub mod container;
mod log_service;
mod product_service;
mod user_service;

#[cfg(test)]
mod test_support;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use catalog_service::{CatalogManager, CatalogService, ImportSummary};
pub use config_service::{ConfigManager, ConfigService};
pub use log_service::{device_with_origin, LogManager, LogService};
pub use product_service::{ProductManager, ProductService};
pub use user_service::{CreateUserInput, UpdateUserInput, UserManager, UserService};

// Parallel execution utilities
pub use container::{batch, parallel};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use log_service::MockLogService;
#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
