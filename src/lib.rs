//! qstories - story playback for the Qomrade platform
//!
//! The library is organized as:
//! - `story`: story data model and feed loading
//! - `service`: the remote story API and fire-and-forget view tracking
//! - `player`: the playback engine (state, ticker, progress sources, segment bar)
//! - `viewer`: the stories bar that chains story groups across users
//! - `tui`: terminal front-end driving the viewer from keyboard/mouse input
//! - `cli`: command-line definitions for the `qstories` binary
//! - `config` / `logging`: configuration file and log setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod service;
pub mod story;
pub mod tui;
pub mod viewer;

pub use config::Config;
pub use player::{MediaCommand, PlaybackState, StoryEngine, TapZone, Timing, Transition};
pub use service::{HttpStoryService, StoryService, ViewTracker};
pub use story::{Media, StoryFeed, StoryGroup, StoryId, StoryItem};
pub use viewer::{StoriesViewer, ViewerEvent};
