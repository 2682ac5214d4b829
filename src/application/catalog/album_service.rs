//! Album use-cases
//!
//! Payloads reach this service already validated; what remains is id and
//! timestamp assignment, not-found interpretation of storage results, and
//! assembling the read-time song list.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::{
    Album, AlbumPayload, AlbumWithSongs, DomainError, DomainResult, RepositoryProvider,
    SongSummary,
};
use crate::shared::ids::{generate_id, ALBUM_ID_PREFIX};

pub struct AlbumService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AlbumService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create an album and return its new id.
    pub async fn add_album(&self, payload: AlbumPayload) -> DomainResult<String> {
        let now = Utc::now();
        let album = Album {
            id: generate_id(ALBUM_ID_PREFIX),
            name: payload.name,
            year: payload.year,
            created_at: now,
            updated_at: now,
        };
        let id = album.id.clone();

        self.repos.albums().insert(album).await?;

        metrics::counter!("catalog_albums_created_total").increment(1);
        info!(album_id = %id, "Album created");
        Ok(id)
    }

    /// All albums, without their songs.
    pub async fn get_albums(&self) -> DomainResult<Vec<Album>> {
        self.repos.albums().find_all().await
    }

    pub async fn get_album_by_id(&self, id: &str) -> DomainResult<AlbumWithSongs> {
        let album = self
            .repos
            .albums()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Album", id))?;

        let songs = self
            .repos
            .songs()
            .find_by_album_id(id)
            .await?
            .into_iter()
            .map(SongSummary::from)
            .collect();

        Ok(AlbumWithSongs { album, songs })
    }

    pub async fn edit_album_by_id(&self, id: &str, payload: AlbumPayload) -> DomainResult<()> {
        let affected = self
            .repos
            .albums()
            .update(id, payload, Utc::now())
            .await?;
        if affected == 0 {
            return Err(DomainError::not_found("Album", id));
        }

        info!(album_id = %id, "Album updated");
        Ok(())
    }

    /// Delete the album and, atomically, every song that references it.
    pub async fn delete_album_by_id(&self, id: &str) -> DomainResult<()> {
        let affected = self.repos.albums().delete_with_songs(id).await?;
        if affected == 0 {
            return Err(DomainError::not_found("Album", id));
        }

        metrics::counter!("catalog_albums_deleted_total").increment(1);
        info!(album_id = %id, "Album deleted");
        Ok(())
    }

    pub async fn album_exists(&self, id: &str) -> DomainResult<bool> {
        self.repos.albums().exists(id).await
    }
}
