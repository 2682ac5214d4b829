//! SeaORM implementation of AlbumRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::db_err;
use crate::domain::album::{Album, AlbumPayload, AlbumRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{album, song};

fn entity_to_domain(a: album::Model) -> Album {
    Album {
        id: a.id,
        name: a.name,
        year: a.year,
        created_at: a.created_at,
        updated_at: a.updated_at,
    }
}

pub struct SeaOrmAlbumRepository {
    db: DatabaseConnection,
}

impl SeaOrmAlbumRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AlbumRepository for SeaOrmAlbumRepository {
    async fn insert(&self, a: Album) -> DomainResult<()> {
        let model = album::ActiveModel {
            id: Set(a.id),
            name: Set(a.name),
            year: Set(a.year),
            created_at: Set(a.created_at),
            updated_at: Set(a.updated_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Album saved: {} ({})", result.name, result.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Album>> {
        let model = album::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Album>> {
        let models = album::Entity::find()
            .order_by_asc(album::Column::CreatedAt)
            .order_by_asc(album::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn exists(&self, id: &str) -> DomainResult<bool> {
        let count = album::Entity::find()
            .filter(album::Column::Id.eq(id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn update(
        &self,
        id: &str,
        payload: AlbumPayload,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let changes = album::ActiveModel {
            name: Set(payload.name),
            year: Set(payload.year),
            updated_at: Set(updated_at),
            ..Default::default()
        };
        let result = album::Entity::update_many()
            .set(changes)
            .filter(album::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn delete_with_songs(&self, id: &str) -> DomainResult<u64> {
        // Dropping `txn` on an early return rolls everything back.
        let txn = self.db.begin().await.map_err(db_err)?;

        let songs = song::Entity::delete_many()
            .filter(song::Column::AlbumId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let albums = album::Entity::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if albums.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Ok(0);
        }

        txn.commit().await.map_err(db_err)?;
        info!(
            "Album {} deleted together with {} song(s)",
            id, songs.rows_affected
        );
        Ok(albums.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    fn album(id: &str, name: &str) -> Album {
        let now = Utc::now();
        Album {
            id: id.into(),
            name: name.into(),
            year: 1969,
            created_at: now,
            updated_at: now,
        }
    }

    async fn insert_song(db: &DatabaseConnection, id: &str, album_id: Option<&str>) {
        let now = Utc::now();
        song::ActiveModel {
            id: Set(id.into()),
            title: Set("Something".into()),
            year: Set(1969),
            performer: Set("The Beatles".into()),
            genre: Set("Rock".into()),
            duration: Set(Some(182)),
            album_id: Set(album_id.map(String::from)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("song inserted");
    }

    #[tokio::test]
    async fn insert_then_find_round_trips_fields() {
        let db = test_database().await;
        let repo = SeaOrmAlbumRepository::new(db);
        let original = album("album-a", "Abbey Road");

        repo.insert(original.clone()).await.unwrap();
        let found = repo.find_by_id("album-a").await.unwrap().expect("present");

        assert_eq!(found.id, original.id);
        assert_eq!(found.name, "Abbey Road");
        assert_eq!(found.year, 1969);
        assert_eq!(found.created_at, original.created_at);
        assert!(repo.exists("album-a").await.unwrap());
        assert!(!repo.exists("album-missing").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_id_is_a_storage_error() {
        let db = test_database().await;
        let repo = SeaOrmAlbumRepository::new(db);
        repo.insert(album("album-a", "One")).await.unwrap();

        let err = repo.insert(album("album-a", "Two")).await.unwrap_err();
        assert!(matches!(err, crate::domain::DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn update_reports_rows_affected() {
        let db = test_database().await;
        let repo = SeaOrmAlbumRepository::new(db);
        repo.insert(album("album-a", "Old")).await.unwrap();

        let payload = AlbumPayload {
            name: "New".into(),
            year: 2000,
        };
        let later = Utc::now() + chrono::Duration::seconds(1);
        assert_eq!(repo.update("album-a", payload.clone(), later).await.unwrap(), 1);
        assert_eq!(repo.update("album-none", payload, later).await.unwrap(), 0);

        let found = repo.find_by_id("album-a").await.unwrap().unwrap();
        assert_eq!(found.name, "New");
        assert_eq!(found.year, 2000);
        assert_eq!(found.updated_at, later);
    }

    #[tokio::test]
    async fn delete_with_songs_removes_only_dependent_songs() {
        let db = test_database().await;
        let repo = SeaOrmAlbumRepository::new(db.clone());
        repo.insert(album("album-a", "A")).await.unwrap();
        repo.insert(album("album-b", "B")).await.unwrap();
        insert_song(&db, "song-1", Some("album-a")).await;
        insert_song(&db, "song-2", Some("album-a")).await;
        insert_song(&db, "song-3", Some("album-b")).await;
        insert_song(&db, "song-4", None).await;

        assert_eq!(repo.delete_with_songs("album-a").await.unwrap(), 1);

        let remaining: Vec<String> = song::Entity::find()
            .order_by_asc(song::Column::Id)
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(remaining, vec!["song-3".to_string(), "song-4".to_string()]);
        assert!(repo.find_by_id("album-a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_album_changes_nothing() {
        let db = test_database().await;
        let repo = SeaOrmAlbumRepository::new(db.clone());
        insert_song(&db, "song-1", None).await;

        assert_eq!(repo.delete_with_songs("album-none").await.unwrap(), 0);
        assert_eq!(song::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_all_returns_in_creation_order() {
        let db = test_database().await;
        let repo = SeaOrmAlbumRepository::new(db);
        let mut first = album("album-z", "First");
        let mut second = album("album-a", "Second");
        first.created_at = Utc::now() - chrono::Duration::minutes(1);
        second.created_at = Utc::now();
        repo.insert(second).await.unwrap();
        repo.insert(first).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["First".to_string(), "Second".to_string()]);
    }
}
