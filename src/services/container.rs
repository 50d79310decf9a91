//! Service Container - Centralized service access.
//!
//! Builds ready-to-use service instances from a store connection
//! handle via explicit constructor injection; no ambient session.

use std::sync::Arc;

use super::{UserManager, UserService};
use crate::infra::UserStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a new service container with a pre-built service
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let repo = Arc::new(UserStore::new(db));
        Self {
            user_service: Arc::new(UserManager::new(repo)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
