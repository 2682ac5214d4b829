//! SeaORM implementation of SongRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::db_err;
use crate::domain::song::{Song, SongFilter, SongPayload, SongRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::song;

fn entity_to_domain(s: song::Model) -> Song {
    Song {
        id: s.id,
        title: s.title,
        year: s.year,
        performer: s.performer,
        genre: s.genre,
        duration: s.duration,
        album_id: s.album_id,
        created_at: s.created_at,
        updated_at: s.updated_at,
    }
}

/// Unicode-aware substring test. SQLite's `LOWER` only folds ASCII, so the
/// comparison stays on this side of the connection.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn accepts(filter: &SongFilter, s: &song::Model) -> bool {
    filter
        .title
        .as_deref()
        .map_or(true, |t| contains_ignore_case(&s.title, t))
        && filter
            .performer
            .as_deref()
            .map_or(true, |p| contains_ignore_case(&s.performer, p))
}

/// A write that names an album the schema does not know surfaces as a
/// missing reference, not a storage fault.
fn write_err(e: DbErr, album_id: Option<&str>) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DomainError::MissingReference {
            entity: "album",
            value: album_id.unwrap_or_default().to_string(),
        },
        _ => db_err(e),
    }
}

pub struct SeaOrmSongRepository {
    db: DatabaseConnection,
}

impl SeaOrmSongRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SongRepository for SeaOrmSongRepository {
    async fn insert(&self, s: Song) -> DomainResult<()> {
        let model = song::ActiveModel {
            id: Set(s.id),
            title: Set(s.title),
            year: Set(s.year),
            performer: Set(s.performer),
            genre: Set(s.genre),
            duration: Set(s.duration),
            album_id: Set(s.album_id.clone()),
            created_at: Set(s.created_at),
            updated_at: Set(s.updated_at),
        };
        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, s.album_id.as_deref()))?;
        info!("Song saved: {} ({})", result.title, result.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Song>> {
        let model = song::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self, filter: &SongFilter) -> DomainResult<Vec<Song>> {
        let models = song::Entity::find()
            .order_by_asc(song::Column::CreatedAt)
            .order_by_asc(song::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models
            .into_iter()
            .filter(|m| accepts(filter, m))
            .map(entity_to_domain)
            .collect())
    }

    async fn find_by_album_id(&self, album_id: &str) -> DomainResult<Vec<Song>> {
        let models = song::Entity::find()
            .filter(song::Column::AlbumId.eq(album_id))
            .order_by_asc(song::Column::CreatedAt)
            .order_by_asc(song::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(
        &self,
        id: &str,
        payload: SongPayload,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let changes = song::ActiveModel {
            title: Set(payload.title),
            year: Set(payload.year),
            performer: Set(payload.performer),
            genre: Set(payload.genre),
            duration: Set(payload.duration),
            album_id: Set(payload.album_id.clone()),
            updated_at: Set(updated_at),
            ..Default::default()
        };
        let result = song::Entity::update_many()
            .set(changes)
            .filter(song::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| write_err(e, payload.album_id.as_deref()))?;
        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<u64> {
        let result = song::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected > 0 {
            info!("Song deleted: {}", id);
        }
        Ok(result.rows_affected)
    }
}
