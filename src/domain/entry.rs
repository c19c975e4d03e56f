//! Journal export records

use crate::domain::MediaKind;
use crate::error::{DayvaultError, Result};
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use serde::Deserialize;

/// Top-level export document (`Journal.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct Export {
    pub entries: Vec<Entry>,
}

/// One journal record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub uuid: String,
    pub creation_date: String,
    pub modified_date: Option<String>,
    pub time_zone: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub starred: bool,
    pub tags: Option<Vec<String>>,
    pub location: Option<Location>,
    pub weather: Option<Weather>,
    #[serde(default)]
    pub photos: Vec<MediaAttachment>,
    #[serde(default)]
    pub audios: Vec<MediaAttachment>,
    #[serde(default)]
    pub videos: Vec<MediaAttachment>,
    #[serde(default)]
    pub pdf_attachments: Vec<MediaAttachment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub place_name: Option<String>,
    pub locality_name: Option<String>,
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub user_label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub temperature_celsius: Option<f64>,
    pub conditions_description: Option<String>,
}

/// A photo, audio, video or pdf attached to an entry
#[derive(Debug, Clone, Deserialize)]
pub struct MediaAttachment {
    /// Reference used by placeholders in the entry text
    pub identifier: String,
    /// Content hash; the file is named `<md5>.<ext>` until renamed
    pub md5: String,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    /// Length in seconds (audio and video)
    pub duration: Option<f64>,
}

impl Entry {
    /// Parsed creation timestamp
    pub fn created(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.creation_date)
    }

    /// Parsed modification timestamp, falling back to creation
    pub fn modified(&self) -> Result<DateTime<FixedOffset>> {
        match &self.modified_date {
            Some(value) => parse_timestamp(value),
            None => self.created(),
        }
    }

    /// Creation timestamp shifted into the entry's own time zone.
    ///
    /// Unknown or missing zone names keep the offset the timestamp was written with.
    pub fn local_created(&self) -> Result<DateTime<FixedOffset>> {
        let created = self.created()?;
        let zone = self
            .time_zone
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok());

        Ok(match zone {
            Some(tz) => created.with_timezone(&tz).fixed_offset(),
            None => created,
        })
    }

    /// Attachments of one kind
    pub fn attachments(&self, kind: MediaKind) -> &[MediaAttachment] {
        match kind {
            MediaKind::Photo => &self.photos,
            MediaKind::Audio => &self.audios,
            MediaKind::Video => &self.videos,
            MediaKind::Pdf => &self.pdf_attachments,
        }
    }
}

/// Parse an ISO-8601 timestamp with offset
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|source| DayvaultError::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}
