//! Song domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub performer: String,
    pub genre: String,
    /// Length in seconds; `None` when unknown.
    pub duration: Option<i32>,
    pub album_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied song fields, used for both create and full-replace edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPayload {
    pub title: String,
    pub year: i32,
    pub performer: String,
    pub genre: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

/// Lightweight song shape used in listings and album aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub performer: String,
}

impl From<Song> for SongSummary {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            title: song.title,
            performer: song.performer,
        }
    }
}

/// Case-insensitive substring filter; all present criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub title: Option<String>,
    pub performer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, performer: &str) -> Song {
        let now = Utc::now();
        Song {
            id: "song-1".into(),
            title: title.into(),
            year: 1975,
            performer: performer.into(),
            genre: "Rock".into(),
            duration: None,
            album_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn summary_keeps_public_fields() {
        let summary = SongSummary::from(song("Come Together", "The Beatles"));
        assert_eq!(summary.title, "Come Together");
        assert_eq!(summary.performer, "The Beatles");
    }
}
