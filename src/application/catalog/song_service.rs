//! Song use-cases

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, Song, SongFilter, SongPayload, SongSummary,
};
use crate::shared::ids::{generate_id, SONG_ID_PREFIX};

pub struct SongService {
    repos: Arc<dyn RepositoryProvider>,
}

impl SongService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Fails before any write when the payload names an album that does
    /// not exist.
    async fn ensure_album_exists(&self, album_id: Option<&str>) -> DomainResult<()> {
        let Some(album_id) = album_id else {
            return Ok(());
        };
        if !self.repos.albums().exists(album_id).await? {
            debug!(album_id, "Song references unknown album");
            return Err(DomainError::MissingReference {
                entity: "album",
                value: album_id.to_string(),
            });
        }
        Ok(())
    }

    /// Create a song and return its new id.
    pub async fn add_song(&self, payload: SongPayload) -> DomainResult<String> {
        self.ensure_album_exists(payload.album_id.as_deref()).await?;

        let now = Utc::now();
        let song = Song {
            id: generate_id(SONG_ID_PREFIX),
            title: payload.title,
            year: payload.year,
            performer: payload.performer,
            genre: payload.genre,
            duration: payload.duration,
            album_id: payload.album_id,
            created_at: now,
            updated_at: now,
        };
        let id = song.id.clone();

        self.repos.songs().insert(song).await?;

        metrics::counter!("catalog_songs_created_total").increment(1);
        info!(song_id = %id, "Song created");
        Ok(id)
    }

    pub async fn get_songs(&self, filter: &SongFilter) -> DomainResult<Vec<SongSummary>> {
        let songs = self.repos.songs().find_all(filter).await?;
        Ok(songs.into_iter().map(SongSummary::from).collect())
    }

    pub async fn get_song_by_id(&self, id: &str) -> DomainResult<Song> {
        self.repos
            .songs()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Song", id))
    }

    /// Full overwrite of the song's mutable fields.
    pub async fn edit_song_by_id(&self, id: &str, payload: SongPayload) -> DomainResult<()> {
        self.ensure_album_exists(payload.album_id.as_deref()).await?;

        let affected = self.repos.songs().update(id, payload, Utc::now()).await?;
        if affected == 0 {
            return Err(DomainError::not_found("Song", id));
        }

        info!(song_id = %id, "Song updated");
        Ok(())
    }

    pub async fn delete_song_by_id(&self, id: &str) -> DomainResult<()> {
        let affected = self.repos.songs().delete_by_id(id).await?;
        if affected == 0 {
            return Err(DomainError::not_found("Song", id));
        }

        metrics::counter!("catalog_songs_deleted_total").increment(1);
        info!(song_id = %id, "Song deleted");
        Ok(())
    }
}
