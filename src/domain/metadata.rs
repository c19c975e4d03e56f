//! Per-entry metadata extraction
//!
//! Each extractor derives a single front-matter field from an [`Entry`]. The
//! location, weather and duration helpers are free functions; tags and titles
//! depend on run settings and live on [`MetadataExtractor`].

use crate::domain::entry::{Entry, MediaAttachment};
use crate::error::{DayvaultError, Result};

/// Characters that may not appear in a vault filename
const ILLEGAL_TITLE_CHARS: &[char] = &[
    '\\', '/', ':', '*', '?', '"', '<', '>', '|', '#', '^', '[', ']',
];

/// Run-scoped settings for tag and title extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorSettings {
    pub tag_prefix: String,
    pub additional_tags: Vec<String>,
    pub default_filename: String,
    pub max_filename_length: usize,
    /// Give entries without a `tags` field the additional tags as well
    pub tag_untagged_entries: bool,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        ExtractorSettings {
            tag_prefix: String::new(),
            additional_tags: Vec::new(),
            default_filename: "Untitled".to_string(),
            max_filename_length: 30,
            tag_untagged_entries: false,
        }
    }
}

/// Extracts tags and titles according to [`ExtractorSettings`]
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    settings: ExtractorSettings,
}

impl MetadataExtractor {
    pub fn new(settings: ExtractorSettings) -> Self {
        MetadataExtractor { settings }
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    /// Rendered tags for the front matter
    ///
    /// Additional tags and the starred tag are only emitted when the entry has a
    /// `tags` field, unless `tag_untagged_entries` is set.
    pub fn tag_list(&self, entry: &Entry) -> Vec<String> {
        let prefix = &self.settings.tag_prefix;

        let Some(entry_tags) = &entry.tags else {
            if self.settings.tag_untagged_entries {
                return self.settings.additional_tags.clone();
            }
            return Vec::new();
        };

        let mut tags = self.settings.additional_tags.clone();
        for tag in entry_tags.iter().filter(|t| !t.is_empty()) {
            let normalized = tag.replace(' ', "-").replace("---", "-");
            tags.push(format!("{}{}", prefix, normalized));
        }

        if entry.starred {
            tags.push(format!("{}starred", prefix));
        }

        tags
    }

    /// Tags joined with ", " (empty when there are none)
    pub fn tags(&self, entry: &Entry) -> String {
        self.tag_list(entry).join(", ")
    }

    /// Derive a filename-safe title from the first meaningful line of text
    pub fn title(&self, entry: &Entry) -> String {
        let Some(text) = &entry.text else {
            return self.settings.default_filename.clone();
        };

        let candidate = text
            .split('\n')
            .find(|line| !line.is_empty() && !line.starts_with("![]"));

        let Some(line) = candidate else {
            return self.settings.default_filename.clone();
        };

        let stripped = line.trim().trim_start_matches('#').trim_start();
        let sanitized: String = stripped
            .chars()
            .map(|c| if ILLEGAL_TITLE_CHARS.contains(&c) { ' ' } else { c })
            .collect();

        let title: String = sanitized
            .trim()
            .chars()
            .take(self.settings.max_filename_length)
            .collect();
        let title = title.trim_end();

        if title.is_empty() {
            self.settings.default_filename.clone()
        } else {
            title.to_string()
        }
    }
}

/// Human-readable place description, or "" without a location
pub fn location(entry: &Entry) -> String {
    let Some(loc) = &entry.location else {
        return String::new();
    };

    let place = if loc.user_label.is_some() {
        None
    } else {
        loc.place_name.as_ref()
    };

    [
        loc.user_label.as_ref(),
        place,
        loc.locality_name.as_ref(),
        loc.administrative_area.as_ref(),
        loc.country.as_ref(),
    ]
    .into_iter()
    .flatten()
    .map(String::as_str)
    .collect::<Vec<_>>()
    .join(", ")
}

/// `"<lat>,<lon>"` when the entry has a location
pub fn coordinates(entry: &Entry) -> Option<String> {
    entry.location.as_ref().map(|loc| {
        format!(
            "{},{}",
            format_coordinate(loc.latitude),
            format_coordinate(loc.longitude)
        )
    })
}

/// Location wrapped in a `geo:` link when coordinates are known
pub fn location_coordinate(entry: &Entry) -> String {
    let place = location(entry);
    match coordinates(entry) {
        Some(coords) if !coords.is_empty() => format!("[{}](geo:{})", place, coords),
        _ => place,
    }
}

/// Degrees with a decimal point always present (`51.0`, not `51`)
pub fn format_coordinate(value: f64) -> String {
    format!("{:?}", value)
}

/// Weather summary, or "" unless both temperature and description are known
pub fn weather(entry: &Entry) -> String {
    let Some(w) = &entry.weather else {
        return String::new();
    };
    let (Some(temperature), Some(description)) =
        (w.temperature_celsius, w.conditions_description.as_ref())
    else {
        return String::new();
    };

    let mut summary = String::new();
    if let Some(locality) = entry
        .location
        .as_ref()
        .and_then(|loc| loc.locality_name.as_ref())
    {
        summary.push_str(locality);
        summary.push(' ');
    }
    summary.push_str(&format!("{}°C {}", temperature.trunc() as i64, description));
    summary
}

/// Format whole seconds as `HH:MM:SS`
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formatted duration of an audio or video attachment
pub fn duration(attachment: &MediaAttachment) -> Result<String> {
    let seconds = attachment
        .duration
        .filter(|d| d.is_finite())
        .ok_or_else(|| DayvaultError::MissingDuration(attachment.identifier.clone()))?;
    Ok(format_duration(seconds.max(0.0).trunc() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_from(json: &str) -> Entry {
        serde_json::from_str(json).unwrap()
    }

    fn extractor() -> MetadataExtractor {
        MetadataExtractor::new(ExtractorSettings {
            tag_prefix: "dayone/".to_string(),
            additional_tags: vec!["journal".to_string()],
            default_filename: "Journal Entry".to_string(),
            max_filename_length: 30,
            tag_untagged_entries: false,
        })
    }

    fn entry_with_text(text: &str) -> Entry {
        let json = serde_json::json!({
            "uuid": "E1",
            "creationDate": "2024-05-01T10:00:00Z",
            "text": text,
        });
        serde_json::from_value(json).unwrap()
    }

    const LOCATED: &str = r#"{
        "uuid": "E1",
        "creationDate": "2024-05-01T10:00:00Z",
        "location": {
            "latitude": 51.5,
            "longitude": -0.12,
            "placeName": "British Museum",
            "localityName": "London",
            "administrativeArea": "England",
            "country": "United Kingdom"
        },
        "weather": {"temperatureCelsius": 14.8, "conditionsDescription": "Cloudy"}
    }"#;

    #[test]
    fn test_location_full() {
        let entry = entry_from(LOCATED);
        assert_eq!(
            location(&entry),
            "British Museum, London, England, United Kingdom"
        );
    }

    #[test]
    fn test_location_user_label_replaces_place_name() {
        let entry = entry_from(
            r#"{
                "uuid": "E1",
                "creationDate": "2024-05-01T10:00:00Z",
                "location": {
                    "latitude": 1.0,
                    "longitude": 2.0,
                    "userLabel": "Home",
                    "placeName": "12 Some Street",
                    "country": "Norway"
                }
            }"#,
        );
        assert_eq!(location(&entry), "Home, Norway");
    }

    #[test]
    fn test_no_location() {
        let entry = entry_with_text("hi");
        assert_eq!(location(&entry), "");
        assert_eq!(coordinates(&entry), None);
        assert_eq!(location_coordinate(&entry), "");
    }

    #[test]
    fn test_location_coordinate_geo_link() {
        let entry = entry_from(LOCATED);
        assert_eq!(coordinates(&entry).as_deref(), Some("51.5,-0.12"));
        assert_eq!(
            location_coordinate(&entry),
            "[British Museum, London, England, United Kingdom](geo:51.5,-0.12)"
        );
    }

    #[test]
    fn test_whole_degree_coordinates_keep_decimal() {
        assert_eq!(format_coordinate(51.0), "51.0");
        assert_eq!(format_coordinate(-3.25), "-3.25");
    }

    #[test]
    fn test_weather_with_locality() {
        let entry = entry_from(LOCATED);
        assert_eq!(weather(&entry), "London 14°C Cloudy");
    }

    #[test]
    fn test_weather_truncates_toward_zero() {
        let entry = entry_from(
            r#"{
                "uuid": "E1",
                "creationDate": "2024-05-01T10:00:00Z",
                "weather": {"temperatureCelsius": -3.7, "conditionsDescription": "Snow"}
            }"#,
        );
        assert_eq!(weather(&entry), "-3°C Snow");
    }

    #[test]
    fn test_weather_requires_both_fields() {
        let entry = entry_from(
            r#"{
                "uuid": "E1",
                "creationDate": "2024-05-01T10:00:00Z",
                "weather": {"temperatureCelsius": 20.0}
            }"#,
        );
        assert_eq!(weather(&entry), "");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(3725), "01:02:05");
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
    }

    #[test]
    fn test_duration_missing_fails() {
        let attachment = MediaAttachment {
            identifier: "A1".to_string(),
            md5: "x".to_string(),
            file_type: None,
            duration: None,
        };
        assert!(matches!(
            duration(&attachment),
            Err(DayvaultError::MissingDuration(_))
        ));
    }

    #[test]
    fn test_duration_fractional_seconds() {
        let attachment = MediaAttachment {
            identifier: "A1".to_string(),
            md5: "x".to_string(),
            file_type: None,
            duration: Some(65.9),
        };
        assert_eq!(duration(&attachment).unwrap(), "00:01:05");
    }

    #[test]
    fn test_tags_prefixed_and_normalized() {
        let entry = entry_from(
            r#"{
                "uuid": "E1",
                "creationDate": "2024-05-01T10:00:00Z",
                "tags": ["road trip", "", "a - b"],
                "starred": true
            }"#,
        );
        assert_eq!(
            extractor().tags(&entry),
            "journal, dayone/road-trip, dayone/a-b, dayone/starred"
        );
    }

    #[test]
    fn test_tags_starred_is_last() {
        let entry = entry_from(
            r#"{"uuid": "E1", "creationDate": "2024-05-01T10:00:00Z", "tags": [], "starred": true}"#,
        );
        assert!(extractor().tags(&entry).ends_with("dayone/starred"));
    }

    #[test]
    fn test_tags_missing_field_yields_nothing() {
        let entry = entry_from(
            r#"{"uuid": "E1", "creationDate": "2024-05-01T10:00:00Z", "starred": true}"#,
        );
        assert_eq!(extractor().tags(&entry), "");
    }

    #[test]
    fn test_tags_untagged_entries_switch() {
        let mut settings = extractor().settings().clone();
        settings.tag_untagged_entries = true;
        let entry = entry_from(r#"{"uuid": "E1", "creationDate": "2024-05-01T10:00:00Z"}"#);
        assert_eq!(MetadataExtractor::new(settings).tags(&entry), "journal");
    }

    #[test]
    fn test_title_skips_image_and_heading() {
        let entry = entry_with_text("![](x)\n# Hello World\nmore");
        assert_eq!(extractor().title(&entry), "Hello World");
    }

    #[test]
    fn test_title_only_images_uses_default() {
        let entry = entry_with_text("![](dayone-moment://AB)\n![](dayone-moment://CD)");
        assert_eq!(extractor().title(&entry), "Journal Entry");
    }

    #[test]
    fn test_title_missing_text_uses_default() {
        let entry = entry_from(r#"{"uuid": "E1", "creationDate": "2024-05-01T10:00:00Z"}"#);
        assert_eq!(extractor().title(&entry), "Journal Entry");
    }

    #[test]
    fn test_title_whitespace_line_uses_default() {
        let entry = entry_with_text("   \nSecond line");
        assert_eq!(extractor().title(&entry), "Journal Entry");
    }

    #[test]
    fn test_title_replaces_illegal_characters() {
        let entry = entry_with_text("What? A/B: [test]");
        assert_eq!(extractor().title(&entry), "What  A B   test");
    }

    #[test]
    fn test_title_truncated_to_max_length() {
        let entry = entry_with_text("## A very long first line that keeps going and going");
        let title = extractor().title(&entry);
        assert_eq!(title, "A very long first line that ke");
        assert_eq!(title.chars().count(), 30);
    }

    #[test]
    fn test_title_cut_at_space_has_no_trailing_space() {
        let mut settings = extractor().settings().clone();
        settings.max_filename_length = 5;
        let entry = entry_with_text("Trip to Oslo");
        assert_eq!(MetadataExtractor::new(settings).title(&entry), "Trip");
    }

    #[test]
    fn test_title_truncation_counts_characters() {
        let mut settings = extractor().settings().clone();
        settings.max_filename_length = 3;
        let entry = entry_with_text("Ærøskøbing");
        assert_eq!(MetadataExtractor::new(settings).title(&entry), "Ærø");
    }
}
