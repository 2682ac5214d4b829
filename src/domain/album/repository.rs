//! Album repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Album, AlbumPayload};
use crate::domain::DomainResult;

#[async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn insert(&self, album: Album) -> DomainResult<()>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Album>>;
    async fn find_all(&self) -> DomainResult<Vec<Album>>;
    async fn exists(&self, id: &str) -> DomainResult<bool>;

    /// Overwrite name/year and stamp `updated_at`. Returns rows affected.
    async fn update(
        &self,
        id: &str,
        payload: AlbumPayload,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64>;

    /// Delete the album and every song referencing it as one atomic step.
    /// Returns the number of album rows removed (0 or 1).
    async fn delete_with_songs(&self, id: &str) -> DomainResult<u64>;
}
