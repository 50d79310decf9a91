//! Service layer - Application use cases and business logic
//!
//! Services orchestrate domain operations through repositories.

mod container;
mod user_service;

pub use container::{ServiceContainer, Services};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
