//! HTTP REST API interfaces
//!
//! - `common`: response envelope and the validated JSON extractor
//! - `error`: domain error to HTTP response mapping
//! - `modules`: per-resource handlers and DTOs, plus middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
