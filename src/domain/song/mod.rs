//! Song aggregate

pub mod model;
pub mod repository;

pub use model::{Song, SongFilter, SongPayload, SongSummary};
pub use repository::SongRepository;
