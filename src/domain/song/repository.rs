//! Song repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Song, SongFilter, SongPayload};
use crate::domain::DomainResult;

#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn insert(&self, song: Song) -> DomainResult<()>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Song>>;
    async fn find_all(&self, filter: &SongFilter) -> DomainResult<Vec<Song>>;
    async fn find_by_album_id(&self, album_id: &str) -> DomainResult<Vec<Song>>;

    /// Overwrite every mutable field and stamp `updated_at`.
    /// Returns rows affected.
    async fn update(
        &self,
        id: &str,
        payload: SongPayload,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64>;

    async fn delete_by_id(&self, id: &str) -> DomainResult<u64>;
}
