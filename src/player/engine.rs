//! Story playback engine.
//!
//! Drives one story group: which story is on screen, how far it has played,
//! and when to move on. The engine is clock agnostic; every time-dependent
//! call takes the current `Instant`, so the front-end decides what "now" is
//! and tests can use a fake clock.
//!
//! Lifecycle of a story:
//! 1. entering it resets progress, starts its [`ProgressSource`] and, if the
//!    story is unviewed, notifies the [`ViewTracker`];
//! 2. the source advances progress (ticker for image/text, position
//!    updates for video);
//! 3. completion (100% or video `ended`) calls [`StoryEngine::handle_next`]
//!    exactly once.

use std::sync::Arc;
use std::time::Instant;

use super::source::ProgressSource;
use super::state::{MediaCommand, PlaybackState, TapZone, Transition};
use super::ticker::Timing;
use crate::service::ViewTracker;
use crate::story::StoryItem;

/// Errors raised when mounting the player.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Cannot play an empty story group")]
    EmptyGroup,

    #[error("No story group at index {index} (feed has {len})")]
    NoSuchGroup { index: usize, len: usize },
}

/// Playback engine for one story group.
pub struct StoryEngine {
    items: Vec<StoryItem>,
    state: PlaybackState,
    timing: Timing,
    source: ProgressSource,
    tracker: Arc<dyn ViewTracker>,
    /// Set once the current story has handed off via `handle_next`
    finished: bool,
}

impl std::fmt::Debug for StoryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryEngine")
            .field("len", &self.items.len())
            .field("state", &self.state)
            .field("source", &self.source)
            .field("finished", &self.finished)
            .finish()
    }
}

impl StoryEngine {
    /// Mount the engine on `items`, showing `initial_index` first.
    pub fn new(
        items: Vec<StoryItem>,
        initial_index: usize,
        timing: Timing,
        tracker: Arc<dyn ViewTracker>,
        now: Instant,
    ) -> Result<Self, PlayerError> {
        if items.is_empty() {
            return Err(PlayerError::EmptyGroup);
        }
        let state = PlaybackState::new(initial_index, items.len());
        let source = ProgressSource::start(&items[state.current_index].media, &timing, now);
        let engine = Self {
            items,
            state,
            timing,
            source,
            tracker,
            finished: false,
        };
        engine.on_enter();
        Ok(engine)
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn items(&self) -> &[StoryItem] {
        &self.items
    }

    pub fn current_item(&self) -> &StoryItem {
        &self.items[self.state.current_index]
    }

    /// Playback command the media element should currently obey.
    ///
    /// `None` for timed stories.
    pub fn media_command(&self) -> Option<MediaCommand> {
        if !self.source.is_video() {
            None
        } else if self.state.paused {
            Some(MediaCommand::Pause)
        } else {
            Some(MediaCommand::Play)
        }
    }

    /// Whether the current story already handed off to the parent.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Next instant at which [`poll`](Self::poll) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.finished {
            None
        } else {
            self.source.next_deadline()
        }
    }

    /// Run all ticks due at `now`.
    ///
    /// Paused ticks are consumed without progress. The story completes on
    /// its `ticks_per_story`-th played tick, with progress snapped to 100.
    /// Completion stops the loop: the ticker it came from is replaced and
    /// its backlog dropped.
    pub fn poll(&mut self, now: Instant) -> Transition {
        if self.finished {
            return Transition::Continue;
        }
        let ProgressSource::Ticker(ticker) = &mut self.source else {
            return Transition::Continue;
        };
        while ticker.fire_due(now) {
            if self.state.paused {
                continue;
            }
            let last = ticker.count_tick();
            if self.state.advance_progress(ticker.step()) || last {
                self.state.set_progress(PlaybackState::COMPLETE);
                return self.finish(now);
            }
        }
        Transition::Continue
    }

    /// Video position update (`timeupdate`). Ignored for timed stories.
    pub fn on_time_update(&mut self, current_time: f64, duration: f64) {
        if let ProgressSource::Video(sync) = &mut self.source {
            if let Some(progress) = sync.update(current_time, duration) {
                self.state.set_progress(progress);
            }
        }
    }

    /// Video reached its end (`ended`). Ignored for timed stories.
    pub fn on_ended(&mut self, now: Instant) -> Transition {
        if self.finished || !self.source.is_video() {
            return Transition::Continue;
        }
        self.state.set_progress(PlaybackState::COMPLETE);
        self.finish(now)
    }

    /// Pointer down: hold the current story.
    pub fn press(&mut self) -> Option<MediaCommand> {
        self.state.paused = true;
        self.source.is_video().then_some(MediaCommand::Pause)
    }

    /// Pointer up: resume from where the hold started.
    ///
    /// The ticker restarts its schedule at `now` so progress neither jumps
    /// nor replays the ticks missed while held. Videos get `Play`.
    pub fn release(&mut self, now: Instant) -> Option<MediaCommand> {
        if !self.state.paused {
            return None;
        }
        self.state.paused = false;
        match &mut self.source {
            ProgressSource::Ticker(ticker) => {
                ticker.rearm(now);
                None
            }
            ProgressSource::Video(_) => Some(MediaCommand::Play),
        }
    }

    /// Go to the next story, or hand over to the next user at the end.
    pub fn handle_next(&mut self, now: Instant) -> Transition {
        let next = self.state.current_index + 1;
        if next < self.items.len() {
            self.go_to(next, now);
            Transition::Advanced
        } else {
            tracing::debug!(index = self.state.current_index, "Last story, next user");
            Transition::NextUser
        }
    }

    /// Go to the previous story, or hand over to the previous user at the start.
    pub fn handle_prev(&mut self, now: Instant) -> Transition {
        if self.state.current_index > 0 {
            self.go_to(self.state.current_index - 1, now);
            Transition::Advanced
        } else {
            tracing::debug!("First story, previous user");
            Transition::PrevUser
        }
    }

    /// Manual navigation from a tap on the story card.
    pub fn tap(&mut self, zone: TapZone, now: Instant) -> Transition {
        match zone {
            TapZone::Left => self.handle_prev(now),
            TapZone::Right => self.handle_next(now),
        }
    }

    /// Replay the current story from the beginning.
    pub fn restart(&mut self, now: Instant) {
        let index = self.state.current_index;
        self.state.jump_to(index);
        self.source = ProgressSource::start(&self.items[index].media, &self.timing, now);
        self.finished = false;
    }

    fn finish(&mut self, now: Instant) -> Transition {
        self.finished = true;
        self.handle_next(now)
    }

    fn go_to(&mut self, index: usize, now: Instant) {
        // Old source is dropped here, before the new one starts counting.
        self.source = ProgressSource::start(&self.items[index].media, &self.timing, now);
        self.state.jump_to(index);
        self.finished = false;
        self.on_enter();
    }

    fn on_enter(&self) {
        let item = self.current_item();
        tracing::debug!(
            index = self.state.current_index,
            id = %item.id,
            kind = item.media.kind(),
            "Showing story"
        );
        if !item.has_viewed {
            self.tracker.mark_viewed(&item.id);
        }
    }
}
