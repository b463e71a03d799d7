//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SKU Scan - barcode scan station and inventory lookup backend
#[derive(Parser, Debug)]
#[command(name = "sku-scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database connection string
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Create the built-in 9999 administrator if missing
    SeedAdmin,

    /// Import products from a CSV file
    Import(ImportArgs),

    /// Export the product catalog to a CSV file
    Export(ExportArgs),

    /// Run an interactive scan station on stdin
    Scan,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// CSV file with itemCode, itemName and barcode columns
    pub file: PathBuf,

    /// Name recorded in the activity log
    #[arg(long, default_value = crate::config::SYSTEM_ACTOR)]
    pub user: String,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Destination CSV file
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_import() {
        let cli = Cli::try_parse_from(["sku-scan", "import", "catalog.csv", "--user", "Malee"]).unwrap();
        match cli.command {
            Commands::Import(args) => {
                assert_eq!(args.file, PathBuf::from("catalog.csv"));
                assert_eq!(args.user, "Malee");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_migrate_status() {
        let cli = Cli::try_parse_from(["sku-scan", "migrate", "status"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }

    #[test]
    fn test_parse_seed_admin() {
        let cli = Cli::try_parse_from(["sku-scan", "-v", "seed-admin"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::SeedAdmin));
    }
}
