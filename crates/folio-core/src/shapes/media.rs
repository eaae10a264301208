//! Shapes for artistic and audiovisual works

use serde::{Deserialize, Serialize};

use crate::item::ItemCore;
use crate::item_type::ItemType;
use crate::shapes::ItemShape;

/// A work of visual art.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub artwork_medium: Option<String>,
    pub artwork_size: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for ArtworkItem {
    const ITEM_TYPE: ItemType = ItemType::Artwork;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "artwork_medium",
        "artwork_size",
        "date",
        "language",
        "short_title",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

/// A released audio recording.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioRecordingItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub audio_recording_format: Option<String>,
    pub series_title: Option<String>,
    pub volume: Option<String>,
    pub number_of_volumes: Option<String>,
    pub place: Option<String>,
    pub label: Option<String>,
    pub date: Option<String>,
    pub running_time: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub short_title: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for AudioRecordingItem {
    const ITEM_TYPE: ItemType = ItemType::AudioRecording;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "audio_recording_format",
        "series_title",
        "volume",
        "number_of_volumes",
        "place",
        "label",
        "date",
        "running_time",
        "language",
        "ISBN",
        "short_title",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

/// A theatrically or digitally distributed film.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilmItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub distributor: Option<String>,
    pub date: Option<String>,
    pub genre: Option<String>,
    pub video_recording_format: Option<String>,
    pub running_time: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for FilmItem {
    const ITEM_TYPE: ItemType = ItemType::Film;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "distributor",
        "date",
        "genre",
        "video_recording_format",
        "running_time",
        "language",
        "short_title",
        "url",
        "access_date",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

/// A released video recording.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoRecordingItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub video_recording_format: Option<String>,
    pub series_title: Option<String>,
    pub volume: Option<String>,
    pub number_of_volumes: Option<String>,
    pub place: Option<String>,
    pub studio: Option<String>,
    pub date: Option<String>,
    pub running_time: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for VideoRecordingItem {
    const ITEM_TYPE: ItemType = ItemType::VideoRecording;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "video_recording_format",
        "series_title",
        "volume",
        "number_of_volumes",
        "place",
        "studio",
        "date",
        "running_time",
        "language",
        "ISBN",
        "short_title",
        "url",
        "access_date",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

/// A single radio broadcast.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioBroadcastItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub program_title: Option<String>,
    pub episode_number: Option<String>,
    pub audio_recording_format: Option<String>,
    pub place: Option<String>,
    pub network: Option<String>,
    pub date: Option<String>,
    pub running_time: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for RadioBroadcastItem {
    const ITEM_TYPE: ItemType = ItemType::RadioBroadcast;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "program_title",
        "episode_number",
        "audio_recording_format",
        "place",
        "network",
        "date",
        "running_time",
        "language",
        "short_title",
        "url",
        "access_date",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

/// A single television broadcast.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TvBroadcastItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub program_title: Option<String>,
    pub episode_number: Option<String>,
    pub video_recording_format: Option<String>,
    pub place: Option<String>,
    pub network: Option<String>,
    pub date: Option<String>,
    pub running_time: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for TvBroadcastItem {
    const ITEM_TYPE: ItemType = ItemType::TvBroadcast;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "program_title",
        "episode_number",
        "video_recording_format",
        "place",
        "network",
        "date",
        "running_time",
        "language",
        "short_title",
        "url",
        "access_date",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

/// A podcast episode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub series_title: Option<String>,
    pub episode_number: Option<String>,
    pub audio_file_type: Option<String>,
    pub running_time: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for PodcastItem {
    const ITEM_TYPE: ItemType = ItemType::Podcast;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "series_title",
        "episode_number",
        "audio_file_type",
        "running_time",
        "url",
        "access_date",
        "language",
        "short_title",
        "rights",
        "extra",
    ];
}

/// A printed or digital map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub map_type: Option<String>,
    pub scale: Option<String>,
    pub series_title: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for MapItem {
    const ITEM_TYPE: ItemType = ItemType::Map;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "map_type",
        "scale",
        "series_title",
        "edition",
        "place",
        "publisher",
        "date",
        "language",
        "ISBN",
        "short_title",
        "url",
        "access_date",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

/// A talk, lecture, or other live presentation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub presentation_type: Option<String>,
    pub date: Option<String>,
    pub place: Option<String>,
    pub meeting_name: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for PresentationItem {
    const ITEM_TYPE: ItemType = ItemType::Presentation;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "presentation_type",
        "date",
        "place",
        "meeting_name",
        "url",
        "access_date",
        "language",
        "short_title",
        "rights",
        "extra",
    ];
}

/// A recorded or transcribed interview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub date: Option<String>,
    pub interview_medium: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for InterviewItem {
    const ITEM_TYPE: ItemType = ItemType::Interview;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "date",
        "interview_medium",
        "language",
        "short_title",
        "url",
        "access_date",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_shapes_differ_only_in_recording_format() {
        assert!(RadioBroadcastItem::FIELDS.contains(&"audio_recording_format"));
        assert!(TvBroadcastItem::FIELDS.contains(&"video_recording_format"));
        assert!(!RadioBroadcastItem::FIELDS.contains(&"video_recording_format"));
    }

    #[test]
    fn artwork_declares_its_medium() {
        assert!(ArtworkItem::FIELDS.contains(&"artwork_medium"));
        assert!(ArtworkItem::FIELDS.contains(&"artwork_size"));
    }
}
