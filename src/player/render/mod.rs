//! Rendering helpers for the story player.
//!
//! Only the segmented progress bar lives here; it is a pure function of the
//! playback state so any front-end can draw it.

mod progress;

pub use progress::{build_segment_bar, segment_fills, EMPTY, FILLED};
