//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Callers are expected to pass validated pagination inputs
/// (`page >= 1`); the repository computes the offset as given.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row; the store assigns the id
    async fn add(&self, name: String, surname: String, password_hash: String) -> AppResult<User>;

    /// Find user by primary key, `None` when absent
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Persist the mutated fields of an already-fetched user.
    ///
    /// Refreshes `updated_at`. No optimistic concurrency check:
    /// concurrent writers race with last-write-wins semantics.
    async fn update(&self, user: User) -> AppResult<User>;

    /// Hard-delete user by primary key
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Fetch one page ordered by creation time (newest first) plus
    /// the total row count of the unfiltered query
    async fn list_paginated(&self, page: u64, page_size: u64) -> AppResult<(Vec<User>, u64)>;
}

/// Concrete implementation of UserRepository over a SeaORM connection
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn add(&self, name: String, surname: String, password_hash: String) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(name),
            surname: Set(surname),
            password: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let active = ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name),
            surname: Set(user.surname),
            password: Set(user.password_hash),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list_paginated(&self, page: u64, page_size: u64) -> AppResult<(Vec<User>, u64)> {
        let offset = page.saturating_sub(1).saturating_mul(page_size);

        // Ties on created_at fall back to the store's natural row order
        let models = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .limit(page_size)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        // Count over the same connection to keep the total close to the
        // page snapshot; a page past the end yields an empty slice with
        // the correct total, not an error
        let total = UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(User::from).collect(), total))
    }
}
