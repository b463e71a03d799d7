//! SKU Scan - barcode scan station and inventory lookup backend
//!
//! Staff log in at a scan station, scan barcodes and see which catalog item
//! a code belongs to. Every login and scan becomes an activity log entry. An
//! HTTP API manages the catalog, the staff list, the logs and the branding
//! shown on the login screen.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Products, users, activity logs and branding
//! - **services**: Use cases over the unit of work
//! - **infra**: Database connection, entities, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **scanner**: Scan station state, keystroke detection and log recording
//! - **types**: Shared types (filters, pagination, responses)
//! - **utils**: Catalog CSV reading and writing
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Create the built-in administrator
//! cargo run -- seed-admin
//!
//! # Open a terminal scan station
//! cargo run -- scan
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod scanner;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{ActivityLog, ActivityType, AppConfig, Password, Product, User, UserRole};
pub use errors::{AppError, AppResult};
