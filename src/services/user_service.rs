//! User service - Handles user-related business logic.
//!
//! Orchestrates repository calls, password hashing, not-found
//! handling, and response shaping for the user lifecycle.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, Password, UpdateUser, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::Paginated;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user, hashing the plaintext password before storage
    async fn create_user(&self, data: CreateUser) -> AppResult<UserResponse>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<UserResponse>;

    /// Get one page of users, newest first, with the total count
    async fn get_list(&self, page: u64, page_size: u64) -> AppResult<Paginated<UserResponse>>;

    /// Apply the supplied fields to an existing user
    async fn update_user(&self, id: i64, data: UpdateUser) -> AppResult<UserResponse>;

    /// Hard-delete a user
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with the given repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, data: CreateUser) -> AppResult<UserResponse> {
        let password = hash_password(data.password).await?;

        let user = self
            .repo
            .add(data.name, data.surname, password.into_string())
            .await?;

        tracing::debug!(id = user.id, "User created");
        Ok(UserResponse::from(user))
    }

    async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found()
            .map(UserResponse::from)
    }

    async fn get_list(&self, page: u64, page_size: u64) -> AppResult<Paginated<UserResponse>> {
        let (users, total) = self.repo.list_paginated(page, page_size).await?;

        Ok(Paginated::new(
            users.into_iter().map(UserResponse::from).collect(),
            page,
            page_size,
            total,
        ))
    }

    async fn update_user(&self, id: i64, data: UpdateUser) -> AppResult<UserResponse> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        // Merge only the fields the caller supplied
        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(surname) = data.surname {
            user.surname = surname;
        }
        if let Some(password) = data.password {
            // An empty password would break the stored hash format,
            // so it is treated the same as an absent field
            if !password.is_empty() {
                user.password_hash = hash_password(password).await?.into_string();
            }
        }

        let updated = self.repo.update(user).await?;
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.find_by_id(id).await?.ok_or_not_found()?;
        self.repo.delete(id).await?;

        tracing::debug!(id, "User deleted");
        Ok(())
    }
}

/// Run the key derivation off the async scheduling path.
///
/// PBKDF2 at this work factor takes tens of milliseconds of pure CPU,
/// enough to stall neighbouring requests if done on a runtime worker.
async fn hash_password(plain: String) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::new(&plain))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?
}
