//! HTTP request handlers.

pub mod auth_handler;
pub mod config_handler;
pub mod health_handler;
pub mod log_handler;
pub mod product_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use config_handler::config_routes;
pub use health_handler::health_check;
pub use log_handler::log_routes;
pub use product_handler::product_routes;
pub use user_handler::user_routes;
