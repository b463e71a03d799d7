//! Branding config handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AppConfig, AppConfigChanges};
use crate::errors::AppResult;
use crate::types::MessageResponse;

pub fn config_routes() -> Router<AppState> {
    Router::new().route("/", get(get_config).post(update_config))
}

/// Current logo and app name
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "Config",
    responses(
        (status = 200, description = "Branding", body = AppConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> AppResult<Json<AppConfig>> {
    Ok(Json(state.config_service.get_config().await?))
}

/// Change logo and/or app name; absent fields are left alone, `"logo": null` removes the logo
#[utoipa::path(
    post,
    path = "/api/config",
    tag = "Config",
    request_body = AppConfigChanges,
    responses(
        (status = 200, description = "Config updated", body = MessageResponse),
        (status = 400, description = "No fields supplied or malformed body")
    )
)]
pub async fn update_config(
    State(state): State<AppState>,
    ValidatedJson(changes): ValidatedJson<AppConfigChanges>,
) -> AppResult<Json<MessageResponse>> {
    state.config_service.update_config(changes).await?;
    Ok(Json(MessageResponse::new("Config updated")))
}
