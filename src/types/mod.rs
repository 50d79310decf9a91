//! Shared types used across layers.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginationParams};
pub use response::ApiResponse;
