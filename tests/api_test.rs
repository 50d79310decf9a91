//! API layer tests covering request validation, shared types, and
//! error-to-response mapping.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use user_api::api::handlers::user_handler::{CreateUserRequest, UpdateUserRequest};
use user_api::domain::{CreateUser, UpdateUser, User, UserResponse};
use user_api::errors::{AppError, AppResult};
use user_api::services::{MockServiceContainer, ServiceContainer, Services, UserService};
use user_api::types::{ApiResponse, Paginated, PaginationParams};

// =============================================================================
// Mock service
// =============================================================================

/// Hand-written service double with canned, stateful behavior.
struct MockUserService {
    users: Mutex<Vec<UserResponse>>,
}

impl MockUserService {
    fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    fn response(id: i64, name: &str, surname: &str) -> UserResponse {
        let now = Utc::now();
        UserResponse {
            id,
            name: name.to_string(),
            surname: surname.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn create_user(&self, data: CreateUser) -> AppResult<UserResponse> {
        let mut users = self.users.lock().unwrap();
        let user = Self::response(users.len() as i64 + 1, &data.name, &data.surname);
        users.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn get_list(&self, page: u64, page_size: u64) -> AppResult<Paginated<UserResponse>> {
        let users = self.users.lock().unwrap();
        let total = users.len() as u64;
        let offset = page.saturating_sub(1).saturating_mul(page_size) as usize;
        let items = users
            .iter()
            .rev()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect();
        Ok(Paginated::new(items, page, page_size, total))
    }

    async fn update_user(&self, id: i64, data: UpdateUser) -> AppResult<UserResponse> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(surname) = data.surname {
            user.surname = surname;
        }
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_mock_service_lifecycle() {
    let service = MockUserService::new();

    let created = service
        .create_user(CreateUser {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let fetched = service.get_user(1).await.unwrap();
    assert_eq!(fetched.name, "Ann");

    let updated = service
        .update_user(
            1,
            UpdateUser {
                surname: Some("Lane".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.surname, "Lane");

    service.delete_user(1).await.unwrap();
    assert!(matches!(
        service.get_user(1).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_service_container_hands_out_service() {
    let container = Services::new(Arc::new(MockUserService::new()));
    let service = container.users();

    let result = service.get_user(42).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_mocked_container_resolves_stub_service() {
    let mut container = MockServiceContainer::new();
    container
        .expect_users()
        .returning(|| Arc::new(MockUserService::new()));

    let service = container.users();
    let page = service.get_list(1, 10).await.unwrap();
    assert_eq!(page.total, 0);
}

// =============================================================================
// Request validation
// =============================================================================

#[test]
fn test_create_request_valid() {
    let request = CreateUserRequest {
        name: "Ann".to_string(),
        surname: "Lee".to_string(),
        password: "secret1".to_string(),
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_create_request_rejects_empty_name() {
    let request = CreateUserRequest {
        name: String::new(),
        surname: "Lee".to_string(),
        password: "secret1".to_string(),
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_create_request_rejects_long_name() {
    let request = CreateUserRequest {
        name: "a".repeat(51),
        surname: "Lee".to_string(),
        password: "secret1".to_string(),
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_create_request_rejects_empty_password() {
    let request = CreateUserRequest {
        name: "Ann".to_string(),
        surname: "Lee".to_string(),
        password: String::new(),
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_update_request_all_absent_is_valid() {
    let request = UpdateUserRequest {
        name: None,
        surname: None,
        password: None,
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_update_request_rejects_empty_name() {
    let request = UpdateUserRequest {
        name: Some(String::new()),
        surname: None,
        password: None,
    };
    assert!(request.validate().is_err());
}

// =============================================================================
// Pagination types
// =============================================================================

#[test]
fn test_pagination_params_defaults() {
    let params: PaginationParams = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params.page(), 1);
    assert_eq!(params.limit(), 100);
    assert_eq!(params.offset(), 0);
}

#[test]
fn test_pagination_params_page_size_capped() {
    let params: PaginationParams =
        serde_json::from_value(json!({"page": 1, "page_size": 5000})).unwrap();
    assert_eq!(params.limit(), 1000);
}

#[test]
fn test_pagination_params_page_zero_clamped() {
    let params: PaginationParams =
        serde_json::from_value(json!({"page": 0, "page_size": 10})).unwrap();
    assert_eq!(params.page(), 1);
    assert_eq!(params.offset(), 0);
}

#[test]
fn test_pagination_params_offset() {
    let params: PaginationParams =
        serde_json::from_value(json!({"page": 3, "page_size": 2})).unwrap();
    assert_eq!(params.offset(), 4);
}

#[test]
fn test_pagination_params_huge_page_saturates() {
    let params: PaginationParams =
        serde_json::from_value(json!({"page": u64::MAX, "page_size": 1000})).unwrap();
    assert_eq!(params.offset(), u64::MAX);
}

#[test]
fn test_paginated_envelope_huge_page_saturates() {
    let page: Paginated<i32> = Paginated::new(vec![], u64::MAX, 1000, 0);
    assert_eq!(page.offset, u64::MAX);
    assert!(page.items.is_empty());
}

#[test]
fn test_paginated_envelope_offset() {
    let page = Paginated::new(vec![1, 2], 3, 2, 5);
    assert_eq!(page.items, vec![1, 2]);
    assert_eq!(page.total, 5);
    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 4);
}

#[test]
fn test_paginated_serializes_all_fields() {
    let page = Paginated::new(vec!["a"], 1, 10, 1);
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["items"], json!(["a"]));
    assert_eq!(value["total"], 1);
    assert_eq!(value["limit"], 10);
    assert_eq!(value["offset"], 0);
}

// =============================================================================
// Response wrapper
// =============================================================================

#[test]
fn test_api_response_message() {
    let response = ApiResponse::message("OK");
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "OK");
}

// =============================================================================
// Error mapping
// =============================================================================

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_validation_maps_to_400() {
    let response = AppError::validation("Name must be 1 to 50 characters").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_database_error_maps_to_500() {
    let error = AppError::from(sea_orm::DbErr::Custom("connection lost".to_string()));
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_internal_error_maps_to_500() {
    let response = AppError::internal("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Domain serialization
// =============================================================================

#[test]
fn test_user_serialization_omits_hash() {
    let now = Utc::now();
    let user = User {
        id: 1,
        name: "Ann".to_string(),
        surname: "Lee".to_string(),
        password_hash: "aabb:ccdd".to_string(),
        created_at: now,
        updated_at: now,
    };

    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("password_hash").is_none());
    assert!(value.get("password").is_none());
    assert_eq!(value["name"], "Ann");
}

#[test]
fn test_user_response_excludes_hash_field() {
    let now = Utc::now();
    let user = User {
        id: 7,
        name: "Ann".to_string(),
        surname: "Lee".to_string(),
        password_hash: "aabb:ccdd".to_string(),
        created_at: now,
        updated_at: now,
    };

    let response = UserResponse::from(user);
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["surname"], "Lee");
    assert!(value.get("password_hash").is_none());
}
