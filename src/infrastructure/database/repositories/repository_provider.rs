//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::album::AlbumRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::song::SongRepository;

use super::album_repository::SeaOrmAlbumRepository;
use super::song_repository::SeaOrmSongRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    albums: SeaOrmAlbumRepository,
    songs: SeaOrmSongRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            albums: SeaOrmAlbumRepository::new(db.clone()),
            songs: SeaOrmSongRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn albums(&self) -> &dyn AlbumRepository {
        &self.albums
    }

    fn songs(&self) -> &dyn SongRepository {
        &self.songs
    }
}
