//! Player state management
//!
//! Contains the `PlaybackState` owned by the engine for one open story
//! group, as well as shared types returned to the parent container.

/// Outcome of feeding an event or clock update into the engine.
///
/// The engine never leaves its story group on its own; running past either
/// end is handed to the parent through `NextUser` / `PrevUser`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing structural changed (progress may have moved)
    Continue,
    /// The current index changed within the group
    Advanced,
    /// Ran past the last story: parent should open the next user's group
    NextUser,
    /// Went back from the first story: parent should open the previous group
    PrevUser,
}

/// Tap zone of the story card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    Left,
    Right,
}

/// Instruction for the native media element (videos only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
}

/// Mutable playback state for the open story group.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Index of the story on screen, always in `[0, len)`
    pub current_index: usize,
    /// Elapsed share of the current story, in `[0, 100]`
    pub progress: f64,
    /// Whether the user is holding the story
    pub paused: bool,
}

impl PlaybackState {
    /// Progress value at which a story is complete.
    pub const COMPLETE: f64 = 100.0;
    const EPSILON: f64 = 1e-6;

    /// Create state for a group of `len` stories, starting at `initial_index`.
    ///
    /// Out-of-range indices are clamped to the last story.
    pub fn new(initial_index: usize, len: usize) -> Self {
        Self {
            current_index: initial_index.min(len.saturating_sub(1)),
            progress: 0.0,
            paused: false,
        }
    }

    /// Move to another story: progress restarts and playback resumes.
    pub fn jump_to(&mut self, index: usize) {
        self.current_index = index;
        self.progress = 0.0;
        self.paused = false;
    }

    /// Add one tick's worth of progress. Returns true once the story is complete.
    ///
    /// Accumulated float error within `EPSILON` of the end counts as complete.
    pub fn advance_progress(&mut self, step: f64) -> bool {
        let next = self.progress + step.max(0.0);
        self.progress = if next >= Self::COMPLETE - Self::EPSILON {
            Self::COMPLETE
        } else {
            next
        };
        self.is_complete()
    }

    /// Set progress from an external position (clamped to `[0, 100]`).
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, Self::COMPLETE);
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= Self::COMPLETE
    }
}
