//! Infrastructure layer: persistence behind the domain repository traits

pub mod database;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, DatabaseConfig};
