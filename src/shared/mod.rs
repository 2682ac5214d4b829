pub mod ids;
pub mod shutdown;
pub mod types;
pub mod validations;

pub use ids::*;
pub use shutdown::*;
pub use types::*;
pub use validations::*;
