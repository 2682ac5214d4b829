//! Catalog domain: entities and repository interfaces

pub mod album;
pub mod repositories;
pub mod song;

pub use album::{Album, AlbumPayload, AlbumRepository, AlbumWithSongs};
pub use repositories::{DomainError, DomainResult, RepositoryProvider};
pub use song::{Song, SongFilter, SongPayload, SongRepository, SongSummary};
