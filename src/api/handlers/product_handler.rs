//! Product catalog handlers.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::SYSTEM_ACTOR;
use crate::domain::{Product, ProductChanges};
use crate::errors::AppResult;
use crate::services::ImportSummary;
use crate::types::{Created, CreatedResponse, MessageResponse};

/// New catalog item
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Item code is required"))]
    #[schema(example = "FG-001")]
    pub item_code: String,
    #[validate(length(min = 1, message = "Item name is required"))]
    #[schema(example = "Drinking Water 600ml")]
    pub item_name: String,
    #[validate(length(min = 1, message = "Barcode is required"))]
    #[schema(example = "8851234567890")]
    pub barcode: String,
}

/// Partial product update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Item name cannot be empty"))]
    pub item_name: Option<String>,
    #[validate(length(min = 1, message = "Barcode cannot be empty"))]
    pub barcode: Option<String>,
}

/// Catalog spreadsheet upload
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    /// CSV text with an `itemCode,itemName,barcode` header
    #[validate(length(min = 1, message = "CSV content is required"))]
    pub csv: String,
    /// Who is importing, for the activity log
    pub user_name: Option<String>,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product).delete(delete_all_products))
        .route("/import", post(import_products))
        .route("/export", get(export_products))
        .route("/:item_code", put(update_product).delete(delete_product))
}

/// List the whole catalog, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.product_service.list_products().await?))
}

/// Add a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Item code or barcode already exists")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Created<CreatedResponse>> {
    let product = Product::new(
        payload.item_code.trim(),
        payload.item_name.trim(),
        payload.barcode.trim(),
    );

    let id = state.product_service.create_product(product).await?;

    Ok(Created(CreatedResponse {
        id,
        message: "Product added".to_string(),
    }))
}

/// Update a product's name or barcode
#[utoipa::path(
    put,
    path = "/api/products/{item_code}",
    tag = "Products",
    params(
        ("item_code" = String, Path, description = "Item code")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Barcode already exists")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(item_code): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    let changes = ProductChanges {
        item_name: payload.item_name.map(|s| s.trim().to_string()),
        barcode: payload.barcode.map(|s| s.trim().to_string()),
    };

    let product = state
        .product_service
        .update_product(&item_code, changes)
        .await?;

    Ok(Json(product))
}

/// Delete one product
#[utoipa::path(
    delete,
    path = "/api/products/{item_code}",
    tag = "Products",
    params(
        ("item_code" = String, Path, description = "Item code")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(item_code): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.product_service.delete_product(&item_code).await?;
    Ok(Json(MessageResponse::new(format!("Product {} deleted", item_code))))
}

/// Delete the entire catalog
#[utoipa::path(
    delete,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products deleted", body = MessageResponse)
    )
)]
pub async fn delete_all_products(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.product_service.delete_all_products().await?;
    Ok(Json(MessageResponse::new("All products deleted")))
}

/// Bulk import from CSV
#[utoipa::path(
    post,
    path = "/api/products/import",
    tag = "Products",
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Import finished", body = ImportSummary),
        (status = 400, description = "Unreadable CSV")
    )
)]
pub async fn import_products(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ImportRequest>,
) -> AppResult<Json<ImportSummary>> {
    let actor = payload.user_name.as_deref().unwrap_or(SYSTEM_ACTOR);
    let summary = state.catalog_service.import_csv(&payload.csv, actor).await?;
    Ok(Json(summary))
}

/// Whole catalog as a CSV download
#[utoipa::path(
    get,
    path = "/api/products/export",
    tag = "Products",
    responses(
        (status = 200, description = "Catalog CSV", content_type = "text/csv", body = String)
    )
)]
pub async fn export_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let csv = state.catalog_service.export_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"products.csv\""),
        ],
        csv,
    ))
}
