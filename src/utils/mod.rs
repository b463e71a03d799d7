//! Utility functions and helpers

pub mod csv;

pub use csv::{parse_catalog, write_catalog, CatalogSheet};
