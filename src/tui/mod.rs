//! Terminal front-end for the story viewer
//!
//! Renders the open story with ratatui and maps crossterm keyboard and
//! mouse input onto the viewer. Video decoding is out of reach for a
//! terminal, so `media::VideoClock` stands in for the native media element.

pub mod app;
pub mod input;
pub mod media;
pub mod theme;
pub mod ui;

pub use app::ViewerApp;
pub use theme::{current_theme, Theme};
