//! Employee management handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::EMPLOYEE_ID_PATTERN;
use crate::domain::{UserResponse, UserRole};
use crate::errors::AppResult;
use crate::services::{CreateUserInput, UpdateUserInput};
use crate::types::{Created, MessageResponse};

static EMPLOYEE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMPLOYEE_ID_PATTERN).expect("employee id pattern is valid"));

/// New employee
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 4-digit employee id, also the login PIN
    #[validate(regex(path = *EMPLOYEE_ID_RE, message = "Employee ID must be 4 digits"))]
    #[schema(example = "1024")]
    pub id: String,
    #[serde(default)]
    #[schema(example = "Mr.")]
    pub title: String,
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Somchai")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Jaidee")]
    pub last_name: String,
    #[serde(default)]
    #[schema(example = "Warehouse")]
    pub department: String,
    /// `admin`; anything else is staff
    #[schema(example = "staff")]
    pub role: Option<String>,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: Option<String>,
}

/// Partial employee update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub title: Option<String>,
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", put(update_user).delete(delete_user))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All employees", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Add an employee
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User added", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Employee ID already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<MessageResponse>> {
    let input = CreateUserInput {
        employee_id: payload.id,
        title: payload.title,
        first_name: payload.first_name,
        last_name: payload.last_name,
        department: payload.department,
        role: payload.role.as_deref().map(UserRole::from),
        password: payload.password,
    };

    state.user_service.create_user(input).await?;
    Ok(Created(MessageResponse::new("User added")))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Employee id")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated employee", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let input = UpdateUserInput {
        title: payload.title,
        first_name: payload.first_name,
        last_name: payload.last_name,
        department: payload.department,
        role: payload.role.as_deref().map(UserRole::from),
        password: payload.password,
    };

    let user = state.user_service.update_user(&id, input).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Remove an employee
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(&id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}
