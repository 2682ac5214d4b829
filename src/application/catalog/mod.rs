//! Catalog module: album and song use-cases
//!
//! HTTP handlers are thin wrappers that delegate to these services.

pub mod album_service;
pub mod song_service;

pub use album_service::AlbumService;
pub use song_service::SongService;
