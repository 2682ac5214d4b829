//! Album aggregate

pub mod model;
pub mod repository;

pub use model::{Album, AlbumPayload, AlbumWithSongs};
pub use repository::AlbumRepository;
