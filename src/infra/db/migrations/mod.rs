//! Database migrations.
//!
//! A single idempotent sequence, applied at startup and by `migrate up`.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_products_table;
mod m20240101_000003_create_activity_logs_table;
mod m20240101_000004_create_app_config_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_products_table::Migration),
            Box::new(m20240101_000003_create_activity_logs_table::Migration),
            Box::new(m20240101_000004_create_app_config_table::Migration),
        ]
    }
}
