//! Activity log handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{ClientIp, ValidatedJson};
use crate::api::AppState;
use crate::domain::{ActivityLog, NewActivity};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn log_routes() -> Router<AppState> {
    Router::new().route("/", get(list_logs).post(create_log).delete(clear_logs))
}

/// Latest 1000 entries, newest first
#[utoipa::path(
    get,
    path = "/api/logs",
    tag = "Logs",
    responses(
        (status = 200, description = "Recent activity", body = Vec<ActivityLog>)
    )
)]
pub async fn list_logs(State(state): State<AppState>) -> AppResult<Json<Vec<ActivityLog>>> {
    Ok(Json(state.log_service.list_logs().await?))
}

/// Append an entry. The stored device gets the caller's IP appended.
#[utoipa::path(
    post,
    path = "/api/logs",
    tag = "Logs",
    request_body = NewActivity,
    responses(
        (status = 201, description = "Log saved", body = MessageResponse),
        (status = 400, description = "Malformed entry")
    )
)]
pub async fn create_log(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    ValidatedJson(entry): ValidatedJson<NewActivity>,
) -> AppResult<Created<MessageResponse>> {
    state.log_service.record(entry, client_ip).await?;
    Ok(Created(MessageResponse::new("Log saved")))
}

/// Truncate the log
#[utoipa::path(
    delete,
    path = "/api/logs",
    tag = "Logs",
    responses(
        (status = 200, description = "All logs cleared", body = MessageResponse)
    )
)]
pub async fn clear_logs(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.log_service.clear_logs().await?;
    Ok(Json(MessageResponse::new("All logs cleared")))
}
