//! Albums module: album CRUD with song aggregation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
