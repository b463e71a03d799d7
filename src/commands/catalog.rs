//! Import and export commands - catalog CSV files.

use crate::cli::args::{ExportArgs, ImportArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::{ServiceContainer, Services};

/// Execute the import command
pub async fn import(args: ImportArgs, config: Config) -> AppResult<()> {
    let text = tokio::fs::read_to_string(&args.file).await.map_err(|e| {
        AppError::BadRequest(format!("Cannot read {}: {}", args.file.display(), e))
    })?;

    let db = super::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config);

    let summary = services.catalog().import_csv(&text, &args.user).await?;

    println!(
        "Imported {} products, {} failed, {} skipped",
        summary.imported, summary.failed, summary.skipped
    );
    Ok(())
}

/// Execute the export command
pub async fn export(args: ExportArgs, config: Config) -> AppResult<()> {
    let db = super::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config);

    let csv = services.catalog().export_csv().await?;
    tokio::fs::write(&args.file, csv).await.map_err(|e| {
        AppError::internal(format!("Cannot write {}: {}", args.file.display(), e))
    })?;

    tracing::info!(file = %args.file.display(), "Catalog exported");
    Ok(())
}
