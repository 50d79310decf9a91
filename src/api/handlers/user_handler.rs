//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Paginated, PaginationParams};

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Given name
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    #[schema(example = "Ann")]
    pub name: String,
    /// Family name
    #[validate(length(min = 1, max = 50, message = "Surname must be 1 to 50 characters"))]
    #[schema(example = "Lee")]
    pub surname: String,
    /// Plaintext password, stored only as a salted hash
    #[validate(length(min = 1, message = "Password must not be empty"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// User update request; absent fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New given name
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    #[schema(example = "Jane")]
    pub name: Option<String>,
    /// New family name
    #[validate(length(min = 1, max = 50, message = "Surname must be 1 to 50 characters"))]
    #[schema(example = "Doe")]
    pub surname: Option<String>,
    /// New plaintext password
    pub password: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .user_service
        .create_user(CreateUser {
            name: payload.name,
            surname: payload.surname,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List users with offset pagination, newest first
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of users")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<UserResponse>>> {
    let page = state
        .user_service
        .get_list(params.page(), params.limit())
        .await?;

    Ok(Json(page))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Update user fields; only supplied fields are applied
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(
            id,
            UpdateUser {
                name: payload.name,
                surname: payload.surname,
                password: payload.password,
            },
        )
        .await?;

    Ok(Json(user))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::message("OK")))
}
