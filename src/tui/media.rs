//! Terminal stand-in for the native video element.
//!
//! A terminal cannot decode video, so `VideoClock` plays the part of the
//! media element: it advances a playback position with wall time while
//! playing, reports `timeupdate`-style positions and emits `ended` once.

use std::time::Instant;

use crate::player::MediaCommand;

/// Simulated playback position of a video story.
#[derive(Debug, Clone)]
pub struct VideoClock {
    duration: f64,
    position: f64,
    playing: bool,
    last: Instant,
    ended_sent: bool,
}

impl VideoClock {
    /// Start playing a video of `duration` seconds at `now`.
    pub fn start(duration: f64, now: Instant) -> Self {
        Self {
            duration: duration.max(0.0),
            position: 0.0,
            playing: true,
            last: now,
            ended_sent: false,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Apply a play/pause instruction from the engine.
    pub fn apply(&mut self, command: MediaCommand, now: Instant) {
        self.advance(now);
        self.playing = matches!(command, MediaCommand::Play);
    }

    /// Move the position forward to `now` and return it.
    pub fn advance(&mut self, now: Instant) -> f64 {
        if self.playing {
            let elapsed = now.saturating_duration_since(self.last).as_secs_f64();
            self.position = (self.position + elapsed).min(self.duration);
            if self.position >= self.duration {
                self.playing = false;
            }
        }
        self.last = now;
        self.position
    }

    /// True exactly once, after the position reaches the end.
    pub fn take_ended(&mut self) -> bool {
        if !self.ended_sent && self.position >= self.duration {
            self.ended_sent = true;
            true
        } else {
            false
        }
    }
}
