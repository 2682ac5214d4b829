//! Song entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    /// `song-` prefixed identifier, assigned by the service
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    pub year: i32,

    pub performer: String,

    pub genre: String,

    /// Seconds
    #[sea_orm(nullable)]
    pub duration: Option<i32>,

    #[sea_orm(nullable)]
    pub album_id: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::album::Entity",
        from = "Column::AlbumId",
        to = "super::album::Column::Id",
        on_delete = "Cascade"
    )]
    Album,
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
