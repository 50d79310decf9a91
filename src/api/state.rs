//! Application state - Dependency injection container.
//!
//! Provides centralized access to services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database handle.
    ///
    /// The service container wires the repository and service from
    /// the connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.connection().clone());

        Self {
            user_service: container.users(),
            database,
        }
    }
}
