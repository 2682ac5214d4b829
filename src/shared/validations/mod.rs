pub mod catalog;
pub mod schema;

pub use catalog::{CatalogValidator, YearPolicy};
pub use schema::{normalize_whole_numbers, FieldKind, FieldSpec, Schema};
