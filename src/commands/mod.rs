//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod catalog;
pub mod migrate;
pub mod scan;
pub mod seed_admin;
pub mod serve;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Open the database and bring the schema up to date
pub(crate) async fn connect(config: &Config) -> AppResult<Database> {
    Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))
}
