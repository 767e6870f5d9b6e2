//! Story data model and feed loading.
//!
//! A feed is the ordered list of [`StoryGroup`]s shown in the stories bar.
//! It can be read from a JSON file or from the `get_all` response of the
//! story API; both accept a bare list of groups or a paginated object with
//! a `results` list.

mod error;
mod model;

pub use error::StoryError;
pub use model::{format_time_ago, Media, StoryGroup, StoryId, StoryItem, StoryUser};

use std::path::Path;

use serde_json::Value;

/// Ordered collection of story groups (one per user).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryFeed {
    pub groups: Vec<StoryGroup>,
}

impl StoryFeed {
    /// Build a feed from groups, dropping groups without stories.
    pub fn new(groups: Vec<StoryGroup>) -> Self {
        let total = groups.len();
        let groups: Vec<StoryGroup> = groups
            .into_iter()
            .filter(|g| !g.stories.is_empty())
            .collect();
        if groups.len() != total {
            tracing::debug!(
                dropped = total - groups.len(),
                "Dropped story groups without stories"
            );
        }
        Self { groups }
    }

    /// Load a feed from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, StoryError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Parse an already-decoded JSON document.
    pub fn from_value(value: Value) -> Result<Self, StoryError> {
        let list = match value {
            Value::Array(_) => value,
            Value::Object(mut map) => match map.remove("results") {
                Some(results @ Value::Array(_)) => results,
                _ => return Err(StoryError::UnexpectedShape),
            },
            _ => return Err(StoryError::UnexpectedShape),
        };
        let groups: Vec<StoryGroup> = serde_json::from_value(list)?;
        Ok(Self::new(groups))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Index of the first group with unviewed stories, or 0.
    pub fn first_unviewed_group(&self) -> usize {
        self.groups
            .iter()
            .position(StoryGroup::has_unviewed)
            .unwrap_or(0)
    }
}
