//! Album and song payload profiles

use chrono::{Datelike, Utc};
use serde_json::Value;

use super::schema::{FieldKind, FieldSpec, Schema};
use crate::shared::types::DomainResult;

pub const TITLE_MAX_LEN: usize = 100;
pub const PERFORMER_MAX_LEN: usize = 100;
pub const GENRE_MAX_LEN: usize = 50;

/// Accepted release years: `min_year ..= current year + max_years_ahead`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPolicy {
    pub min_year: i32,
    pub max_years_ahead: i32,
}

impl Default for YearPolicy {
    fn default() -> Self {
        Self {
            min_year: 1901,
            max_years_ahead: 1,
        }
    }
}

impl YearPolicy {
    pub fn max_year_for(&self, current_year: i32) -> i32 {
        current_year + self.max_years_ahead
    }

    pub fn max_year(&self) -> i32 {
        self.max_year_for(Utc::now().year())
    }

    fn field(&self) -> FieldKind {
        FieldKind::Integer {
            min: Some(i64::from(self.min_year)),
            max: Some(i64::from(self.max_year())),
        }
    }
}

/// Validates raw request payloads before they reach the catalog services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogValidator {
    pub years: YearPolicy,
}

impl CatalogValidator {
    pub fn new(years: YearPolicy) -> Self {
        Self { years }
    }

    pub fn album_schema(&self) -> Schema {
        Schema::new(
            "Album",
            vec![
                FieldSpec::required("name", FieldKind::Text { max_len: None }),
                FieldSpec::required("year", self.years.field()),
            ],
        )
    }

    pub fn song_schema(&self) -> Schema {
        Schema::new(
            "Song",
            vec![
                FieldSpec::required(
                    "title",
                    FieldKind::Text {
                        max_len: Some(TITLE_MAX_LEN),
                    },
                ),
                FieldSpec::required("year", self.years.field()),
                FieldSpec::required(
                    "performer",
                    FieldKind::Text {
                        max_len: Some(PERFORMER_MAX_LEN),
                    },
                ),
                FieldSpec::required(
                    "genre",
                    FieldKind::Text {
                        max_len: Some(GENRE_MAX_LEN),
                    },
                ),
                FieldSpec::optional(
                    "duration",
                    FieldKind::Integer {
                        min: Some(0),
                        max: Some(i64::from(i32::MAX)),
                    },
                ),
                FieldSpec::optional("albumId", FieldKind::Text { max_len: None }),
            ],
        )
    }

    pub fn validate_album(&self, payload: &Value) -> DomainResult<()> {
        self.album_schema().validate(payload)
    }

    pub fn validate_song(&self, payload: &Value) -> DomainResult<()> {
        self.song_schema().validate(payload)
    }
}
