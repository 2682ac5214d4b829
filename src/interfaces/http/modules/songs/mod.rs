//! Songs module: song CRUD and filtered listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
