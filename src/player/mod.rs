//! Story playback engine
//!
//! Plays one story group: a timed ticker for image and text stories,
//! position sync for videos, and index navigation that hands over to the
//! parent container at either end of the group.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState struct and shared types (Transition, TapZone, MediaCommand)
//! - `ticker`: Timing and the deadline-based Ticker
//! - `source`: the single active progress source (ticker or video sync)
//! - `engine`: the StoryEngine state machine
//! - `render/`: segmented progress bar
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//! use qstories::player::{StoryEngine, Timing, Transition};
//! use qstories::service::NullViewTracker;
//! use qstories::StoryItem;
//!
//! let t0 = Instant::now();
//! let items = vec![StoryItem::text(1, "hello")];
//! let mut engine =
//!     StoryEngine::new(items, 0, Timing::default(), Arc::new(NullViewTracker), t0).unwrap();
//! assert_eq!(engine.poll(t0 + Duration::from_secs(5)), Transition::NextUser);
//! ```

mod engine;
pub mod render;
mod source;
pub mod state;
mod ticker;

pub use engine::{PlayerError, StoryEngine};
pub use source::{ProgressSource, VideoSync};
pub use state::{MediaCommand, PlaybackState, TapZone, Transition};
pub use ticker::{Ticker, Timing};
