//! Track information types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a track inside a Matroska container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackType {
    /// Video stream.
    Video,
    /// Audio stream.
    Audio,
    /// Subtitle stream (mkvmerge reports these as "subtitles").
    Subtitle,
    /// Anything else, kept verbatim (e.g. "buttons").
    Other(String),
}

impl TrackType {
    /// Name used when reporting this type.
    pub fn as_str(&self) -> &str {
        match self {
            TrackType::Video => "video",
            TrackType::Audio => "audio",
            TrackType::Subtitle => "subtitle",
            TrackType::Other(s) => s,
        }
    }
}

impl From<&str> for TrackType {
    fn from(s: &str) -> Self {
        match s {
            "video" => TrackType::Video,
            "audio" => TrackType::Audio,
            "subtitles" | "subtitle" => TrackType::Subtitle,
            other => TrackType::Other(other.to_string()),
        }
    }
}

impl From<String> for TrackType {
    fn from(s: String) -> Self {
        TrackType::from(s.as_str())
    }
}

impl From<TrackType> for String {
    fn from(t: TrackType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One track of the source file, as reported by the probe.
///
/// `id` is the container's own track number and is never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track identifier in the source file.
    pub id: u32,
    /// Track type.
    pub kind: TrackType,
    /// Codec identifier (e.g., "E-AC-3", "AAC").
    pub codec: String,
    /// Language code, empty when unspecified.
    pub language: String,
}

impl Track {
    /// Create a new track.
    pub fn new(
        id: u32,
        kind: impl Into<TrackType>,
        codec: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            codec: codec.into(),
            language: language.into(),
        }
    }
}
