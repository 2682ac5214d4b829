//! Album domain entity

use chrono::{DateTime, Utc};

use crate::domain::song::SongSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied album fields, used for both create and full-replace edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPayload {
    pub name: String,
    pub year: i32,
}

/// An album together with the songs that currently reference it.
///
/// The song list is assembled at read time and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumWithSongs {
    pub album: Album,
    pub songs: Vec<SongSummary>,
}
