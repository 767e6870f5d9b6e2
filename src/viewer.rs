//! Stories bar: chains story groups across users.
//!
//! Owns the feed and the lifecycle of the open viewer. The engine plays one
//! group at a time; when it runs past either end, the viewer decides what
//! happens next:
//! - `NextUser` opens the following group at its first unviewed story, or
//!   closes the viewer after the last group;
//! - `PrevUser` opens the previous group at its first story, or replays
//!   the current story when there is no previous group.

use std::sync::Arc;
use std::time::Instant;

use crate::player::{MediaCommand, PlayerError, StoryEngine, TapZone, Timing, Transition};
use crate::service::ViewTracker;
use crate::story::{StoryFeed, StoryGroup};

/// What changed after an event, for the front-end to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Same story on screen
    Continue,
    /// Another story of the same group is on screen
    StoryChanged,
    /// Another user's group is on screen
    GroupChanged,
    /// The viewer closed
    Closed,
}

/// The open group and its engine.
#[derive(Debug)]
struct OpenGroup {
    index: usize,
    engine: StoryEngine,
}

/// Parent container for the story engine.
pub struct StoriesViewer {
    feed: StoryFeed,
    timing: Timing,
    tracker: Arc<dyn ViewTracker>,
    open: Option<OpenGroup>,
}

impl StoriesViewer {
    pub fn new(feed: StoryFeed, timing: Timing, tracker: Arc<dyn ViewTracker>) -> Self {
        Self {
            feed,
            timing,
            tracker,
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Index of the open group.
    pub fn group_index(&self) -> Option<usize> {
        self.open.as_ref().map(|g| g.index)
    }

    pub fn current_group(&self) -> Option<&StoryGroup> {
        self.group_index().map(|i| &self.feed.groups[i])
    }

    pub fn engine(&self) -> Option<&StoryEngine> {
        self.open.as_ref().map(|g| &g.engine)
    }

    /// Open the group at `index`, starting at its first unviewed story.
    pub fn open(&mut self, index: usize, now: Instant) -> Result<(), PlayerError> {
        let start = self
            .feed
            .groups
            .get(index)
            .map(StoryGroup::first_unviewed)
            .ok_or_else(|| PlayerError::NoSuchGroup {
                index,
                len: self.feed.len(),
            })?;
        self.mount(index, start, now)
    }

    /// Close the viewer.
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            tracing::debug!(group = open.index, "Closing story viewer");
        }
    }

    /// Advance the clock.
    pub fn poll(&mut self, now: Instant) -> ViewerEvent {
        match self.open.as_mut() {
            Some(open) => {
                let transition = open.engine.poll(now);
                self.apply(transition, now)
            }
            None => ViewerEvent::Closed,
        }
    }

    pub fn tap(&mut self, zone: TapZone, now: Instant) -> ViewerEvent {
        match self.open.as_mut() {
            Some(open) => {
                let transition = open.engine.tap(zone, now);
                self.apply(transition, now)
            }
            None => ViewerEvent::Closed,
        }
    }

    pub fn press(&mut self) -> Option<MediaCommand> {
        self.open.as_mut().and_then(|open| open.engine.press())
    }

    pub fn release(&mut self, now: Instant) -> Option<MediaCommand> {
        self.open.as_mut().and_then(|open| open.engine.release(now))
    }

    pub fn on_time_update(&mut self, current_time: f64, duration: f64) {
        if let Some(open) = self.open.as_mut() {
            open.engine.on_time_update(current_time, duration);
        }
    }

    pub fn on_ended(&mut self, now: Instant) -> ViewerEvent {
        match self.open.as_mut() {
            Some(open) => {
                let transition = open.engine.on_ended(now);
                self.apply(transition, now)
            }
            None => ViewerEvent::Closed,
        }
    }

    /// Skip to the next user's group.
    pub fn next_user(&mut self, now: Instant) -> ViewerEvent {
        self.apply(Transition::NextUser, now)
    }

    /// Go back to the previous user's group.
    pub fn prev_user(&mut self, now: Instant) -> ViewerEvent {
        self.apply(Transition::PrevUser, now)
    }

    fn apply(&mut self, transition: Transition, now: Instant) -> ViewerEvent {
        let Some(current) = self.group_index() else {
            return ViewerEvent::Closed;
        };
        match transition {
            Transition::Continue => ViewerEvent::Continue,
            Transition::Advanced => ViewerEvent::StoryChanged,
            Transition::NextUser => {
                let next = current + 1;
                if next < self.feed.len() {
                    let start = self.feed.groups[next].first_unviewed();
                    self.remount(next, start, now)
                } else {
                    self.close();
                    ViewerEvent::Closed
                }
            }
            Transition::PrevUser => {
                if current > 0 {
                    self.remount(current - 1, 0, now)
                } else {
                    if let Some(open) = self.open.as_mut() {
                        open.engine.restart(now);
                    }
                    ViewerEvent::StoryChanged
                }
            }
        }
    }

    fn remount(&mut self, index: usize, start: usize, now: Instant) -> ViewerEvent {
        match self.mount(index, start, now) {
            Ok(()) => ViewerEvent::GroupChanged,
            Err(e) => {
                tracing::warn!(error = %e, group = index, "Could not open story group");
                self.close();
                ViewerEvent::Closed
            }
        }
    }

    fn mount(&mut self, index: usize, start: usize, now: Instant) -> Result<(), PlayerError> {
        let group = &self.feed.groups[index];
        tracing::debug!(group = index, user = %group.user.username, start, "Opening story group");
        // The previous engine (and its progress source) is dropped first.
        self.open = None;
        let engine = StoryEngine::new(
            group.stories.clone(),
            start,
            self.timing,
            Arc::clone(&self.tracker),
            now,
        )?;
        self.open = Some(OpenGroup { index, engine });
        Ok(())
    }
}
