//! Song DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Song, SongFilter, SongPayload, SongSummary};
use crate::interfaces::http::common::PayloadSchema;
use crate::shared::types::DomainResult;
use crate::shared::validations::CatalogValidator;

/// Body of `POST /songs` and `PUT /songs/{id}`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongRequest {
    #[schema(example = "Come Together")]
    pub title: String,
    #[schema(example = 1969)]
    pub year: i32,
    #[schema(example = "The Beatles")]
    pub performer: String,
    #[schema(example = "Rock")]
    pub genre: String,
    /// Length in seconds
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub album_id: Option<String>,
}

impl PayloadSchema for SongRequest {
    fn validate(validator: &CatalogValidator, payload: &Value) -> DomainResult<()> {
        validator.validate_song(payload)
    }
}

impl From<SongRequest> for SongPayload {
    fn from(r: SongRequest) -> Self {
        Self {
            title: r.title,
            year: r.year,
            performer: r.performer,
            genre: r.genre,
            duration: r.duration,
            album_id: r.album_id,
        }
    }
}

/// Query string of `GET /songs`
#[derive(Debug, Deserialize, IntoParams)]
pub struct SongQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the performer
    pub performer: Option<String>,
}

impl From<SongQuery> for SongFilter {
    fn from(q: SongQuery) -> Self {
        Self {
            title: q.title,
            performer: q.performer,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub performer: String,
    pub genre: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Song> for SongDto {
    fn from(s: Song) -> Self {
        Self {
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
}

/// Public song shape used in listings and inside albums
#[derive(Debug, Serialize, ToSchema)]
pub struct SongSummaryDto {
    pub id: String,
    pub title: String,
    pub performer: String,
}

impl From<SongSummary> for SongSummaryDto {
    fn from(s: SongSummary) -> Self {
        Self {
            id: s.id,
            title: s.title,
            performer: s.performer,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongIdData {
    pub song_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SongsData {
    pub songs: Vec<SongSummaryDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SongData {
    pub song: SongDto,
}
