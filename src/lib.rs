//! # OpenMusic Catalog Service
//!
//! REST service managing a catalog of albums and songs, with optional
//! album membership for songs and cascading album deletion.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Catalog entities and repository traits
//! - **application**: Album and song use-cases
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors, id generation, payload validation, shutdown
//! - **config** / **server**: configuration loading and the server lifecycle

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, resolve_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
