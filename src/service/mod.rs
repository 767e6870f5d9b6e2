//! Remote story data source.
//!
//! The playback engine only ever calls [`ViewTracker::mark_viewed`], which is
//! fire-and-forget. The full [`StoryService`] surface is used by the CLI to
//! fetch the feed and post stories.

mod error;
mod http;
mod tracker;

pub use error::ServiceError;
pub use http::{HttpStoryService, NewStory};
pub use tracker::{DetachedViewTracker, NullViewTracker, ViewTracker};

use crate::story::{StoryFeed, StoryId, StoryItem};

/// Operations offered by the story API.
pub trait StoryService: Send + Sync {
    /// Fetch all story groups visible to the current user.
    fn get_all(&self) -> Result<StoryFeed, ServiceError>;

    /// Record that the current user has seen a story.
    fn view(&self, id: &StoryId) -> Result<(), ServiceError>;

    /// Publish a new story.
    fn create(&self, story: &NewStory) -> Result<StoryItem, ServiceError>;
}
