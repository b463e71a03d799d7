//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, config_handler, log_handler, product_handler, user_handler,
};
use crate::domain::{
    ActivityLog, ActivityType, AppConfig, AppConfigChanges, NewActivity, Product, UserResponse,
    UserRole,
};
use crate::services::ImportSummary;
use crate::types::{CreatedResponse, MessageResponse};

/// OpenAPI documentation for the SKU Scan backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SKU Scan API",
        version = "0.1.0",
        description = "Barcode scan station backend: catalog, employees, branding and activity log",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        product_handler::list_products,
        product_handler::create_product,
        product_handler::update_product,
        product_handler::delete_product,
        product_handler::delete_all_products,
        product_handler::import_products,
        product_handler::export_products,
        user_handler::list_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        config_handler::get_config,
        config_handler::update_config,
        log_handler::list_logs,
        log_handler::create_log,
        log_handler::clear_logs,
    ),
    components(
        schemas(
            // Domain types
            Product,
            UserRole,
            UserResponse,
            AppConfig,
            AppConfigChanges,
            ActivityType,
            ActivityLog,
            NewActivity,
            // Request / response bodies
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            product_handler::CreateProductRequest,
            product_handler::UpdateProductRequest,
            product_handler::ImportRequest,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            ImportSummary,
            CreatedResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Employee login"),
        (name = "Products", description = "Product catalog"),
        (name = "Users", description = "Employee management"),
        (name = "Config", description = "Login screen branding"),
        (name = "Logs", description = "Activity log")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_api_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/api/products", "/api/products/{item_code}", "/api/login", "/api/logs"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
