//! Health module: liveness, database ping and the root banner

pub mod handlers;

pub use handlers::*;
