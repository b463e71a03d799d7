//! Shared types: list views and response bodies.

mod filters;
mod pagination;
mod response;

pub use filters::{LogFilter, ProductFilter, UserFilter};
pub use pagination::{Paginated, PaginationMeta, PaginationParams};
pub use response::{Created, CreatedResponse, MessageResponse};
