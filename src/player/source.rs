//! Progress sources.
//!
//! Timed stories (image, text) advance from a [`Ticker`]; videos follow the
//! native playback position. Exactly one source exists per story on screen.

use std::time::Instant;

use super::ticker::{Ticker, Timing};
use crate::story::Media;

/// Derives progress from a video's playback position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VideoSync {
    /// Last reported playback position (seconds)
    pub current_time: f64,
    /// Last reported media duration (seconds)
    pub duration: f64,
}

impl VideoSync {
    /// Record a position update and return the matching progress.
    ///
    /// Returns `None` while the duration is unknown (zero, negative or NaN).
    pub fn update(&mut self, current_time: f64, duration: f64) -> Option<f64> {
        if !(duration.is_finite() && duration > 0.0 && current_time.is_finite()) {
            return None;
        }
        self.current_time = current_time;
        self.duration = duration;
        Some((current_time / duration * 100.0).clamp(0.0, 100.0))
    }
}

/// The single active progress source of the story on screen.
#[derive(Debug)]
pub enum ProgressSource {
    Ticker(Ticker),
    Video(VideoSync),
}

impl ProgressSource {
    /// Pick the source for `media` and start it at `now`.
    pub fn start(media: &Media, timing: &Timing, now: Instant) -> Self {
        match media {
            Media::Image { .. } | Media::Text { .. } => Self::Ticker(Ticker::start(timing, now)),
            Media::Video { .. } => Self::Video(VideoSync::default()),
        }
    }

    /// When the source next needs a clock update, if it is clock driven.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self {
            Self::Ticker(ticker) => Some(ticker.next_due()),
            Self::Video(_) => None,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}
