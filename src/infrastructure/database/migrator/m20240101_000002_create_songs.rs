//! Create songs table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_albums::Albums;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Songs::Id)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Songs::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Songs::Year).integer().not_null())
                    .col(ColumnDef::new(Songs::Performer).string_len(100).not_null())
                    .col(ColumnDef::new(Songs::Genre).string_len(50).not_null())
                    .col(ColumnDef::new(Songs::Duration).integer())
                    .col(ColumnDef::new(Songs::AlbumId).string_len(50))
                    .col(
                        ColumnDef::new(Songs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Songs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_songs_album")
                            .from(Songs::Table, Songs::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Album aggregation reads songs by album_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_songs_album_id")
                    .table(Songs::Table)
                    .col(Songs::AlbumId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Songs {
    Table,
    Id,
    Title,
    Year,
    Performer,
    Genre,
    Duration,
    AlbumId,
    CreatedAt,
    UpdatedAt,
}
