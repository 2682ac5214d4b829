//! Album DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Album, AlbumPayload, AlbumWithSongs};
use crate::interfaces::http::common::PayloadSchema;
use crate::interfaces::http::modules::songs::SongSummaryDto;
use crate::shared::types::DomainResult;
use crate::shared::validations::CatalogValidator;

/// Body of `POST /albums` and `PUT /albums/{id}`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRequest {
    /// Album name
    #[schema(example = "Abbey Road")]
    pub name: String,
    /// Release year
    #[schema(example = 1969)]
    pub year: i32,
}

impl PayloadSchema for AlbumRequest {
    fn validate(validator: &CatalogValidator, payload: &Value) -> DomainResult<()> {
        validator.validate_album(payload)
    }
}

impl From<AlbumRequest> for AlbumPayload {
    fn from(r: AlbumRequest) -> Self {
        Self {
            name: r.name,
            year: r.year,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Album> for AlbumDto {
    fn from(a: Album) -> Self {
        Self {
            id: a.id,
            name: a.name,
            year: a.year,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Album with the songs currently attached to it
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDetailDto {
    #[serde(flatten)]
    pub album: AlbumDto,
    pub songs: Vec<SongSummaryDto>,
}

impl From<AlbumWithSongs> for AlbumDetailDto {
    fn from(a: AlbumWithSongs) -> Self {
        Self {
            album: a.album.into(),
            songs: a.songs.into_iter().map(SongSummaryDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumIdData {
    pub album_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlbumsData {
    pub albums: Vec<AlbumDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlbumData {
    pub album: AlbumDetailDto,
}
