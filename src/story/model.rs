//! Story data model.
//!
//! Mirrors the JSON returned by the platform's story endpoints. The flat
//! `media_type` / `media_url` / `background_color` fields are folded into
//! the [`Media`] tagged union at parse time so that playback can dispatch
//! on media kind with a single exhaustive match.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::StoryError;

/// Opaque story identifier.
///
/// The API sends either numbers or strings; both land here verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl From<u64> for StoryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// What a story displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    /// Still image, shown for the configured display duration
    Image { url: Option<String> },
    /// Video; progress follows the native playback position
    Video {
        url: Option<String>,
        /// Duration reported by the API, if any (seconds)
        duration_secs: Option<f64>,
    },
    /// Text card on a solid background, shown for the display duration
    Text { background_color: Option<String> },
}

impl Media {
    /// Short lowercase name of the media kind (matches the API's `media_type`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Text { .. } => "text",
        }
    }
}

/// A single story. Read-only input to the playback engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawStoryItem")]
pub struct StoryItem {
    pub id: StoryId,
    pub media: Media,
    /// Caption text (empty when the story has none)
    pub caption: String,
    /// Human-readable age, e.g. "5m" or "2h"
    pub time_ago: String,
    /// Whether the signed-in user has already seen this story
    pub has_viewed: bool,
}

impl StoryItem {
    /// Build a text story (used by tests and offline demos).
    pub fn text(id: impl Into<StoryId>, caption: &str) -> Self {
        Self {
            id: id.into(),
            media: Media::Text {
                background_color: None,
            },
            caption: caption.to_string(),
            time_ago: String::new(),
            has_viewed: false,
        }
    }

    /// Build an image story.
    pub fn image(id: impl Into<StoryId>, url: &str) -> Self {
        Self {
            id: id.into(),
            media: Media::Image {
                url: Some(url.to_string()),
            },
            caption: String::new(),
            time_ago: String::new(),
            has_viewed: false,
        }
    }

    /// Build a video story.
    pub fn video(id: impl Into<StoryId>, url: &str, duration_secs: Option<f64>) -> Self {
        Self {
            id: id.into(),
            media: Media::Video {
                url: Some(url.to_string()),
                duration_secs,
            },
            caption: String::new(),
            time_ago: String::new(),
            has_viewed: false,
        }
    }

    /// Mark as already viewed (builder style).
    pub fn viewed(mut self) -> Self {
        self.has_viewed = true;
        self
    }
}

/// Wire shape of a story as sent by the API.
#[derive(Debug, Deserialize)]
struct RawStoryItem {
    id: StoryId,
    media_type: String,
    #[serde(default)]
    media_url: Option<String>,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    time_ago: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    has_viewed: bool,
}

impl TryFrom<RawStoryItem> for StoryItem {
    type Error = StoryError;

    fn try_from(raw: RawStoryItem) -> Result<Self, Self::Error> {
        let url = raw.media_url.filter(|u| !u.is_empty());
        let media = match raw.media_type.to_ascii_lowercase().as_str() {
            "image" => Media::Image { url },
            "video" => Media::Video {
                url,
                duration_secs: raw.duration.filter(|d| d.is_finite() && *d > 0.0),
            },
            "text" => Media::Text {
                background_color: raw.background_color.filter(|c| !c.is_empty()),
            },
            other => return Err(StoryError::UnknownMediaType(other.to_string())),
        };

        let time_ago = match (raw.time_ago, raw.created_at) {
            (Some(t), _) => t,
            (None, Some(created)) => format_time_ago(created, Utc::now()),
            (None, None) => String::new(),
        };

        Ok(Self {
            id: raw.id,
            media,
            caption: raw.caption.unwrap_or_default(),
            time_ago,
            has_viewed: raw.has_viewed,
        })
    }
}

/// Format the age of a story relative to `now` ("now", "5m", "3h", "2d").
pub fn format_time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created).num_seconds().max(0);
    match secs {
        0..=59 => "now".to_string(),
        60..=3599 => format!("{}m", secs / 60),
        3600..=86_399 => format!("{}h", secs / 3600),
        _ => format!("{}d", secs / 86_400),
    }
}

/// Owner of a story group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoryUser {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// All stories of one user, in display order (earliest first).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoryGroup {
    pub user: StoryUser,
    #[serde(default)]
    pub stories: Vec<StoryItem>,
}

impl StoryGroup {
    pub fn new(username: &str, stories: Vec<StoryItem>) -> Self {
        Self {
            user: StoryUser {
                username: username.to_string(),
                full_name: None,
                avatar: None,
            },
            stories,
        }
    }

    /// Index of the first story not yet seen, or 0 when all are viewed.
    pub fn first_unviewed(&self) -> usize {
        self.stories
            .iter()
            .position(|s| !s.has_viewed)
            .unwrap_or(0)
    }

    pub fn has_unviewed(&self) -> bool {
        self.stories.iter().any(|s| !s.has_viewed)
    }

    pub fn unviewed_count(&self) -> usize {
        self.stories.iter().filter(|s| !s.has_viewed).count()
    }
}
