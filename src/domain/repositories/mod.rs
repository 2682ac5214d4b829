//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::album::AlbumRepository;
use super::song::SongRepository;

pub use crate::shared::types::{DomainError, DomainResult};

/// Provides access to the catalog repositories.
///
/// Services hold one `Arc<dyn RepositoryProvider>` and ask for the
/// repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let album = repos.albums().find_by_id("album-Qm8ZkT1xV4cL9pWe").await?;
///     let songs = repos.songs().find_by_album_id("album-Qm8ZkT1xV4cL9pWe").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn albums(&self) -> &dyn AlbumRepository;
    fn songs(&self) -> &dyn SongRepository;
}
