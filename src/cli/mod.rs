//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `seed-admin` - Built-in administrator
//! - `import` / `export` - Catalog CSV exchange
//! - `scan` - Interactive scan station

pub mod args;

pub use args::{Cli, Commands};
