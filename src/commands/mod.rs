//! Subcommand handlers for the qstories binary.

pub mod config;
pub mod list;
pub mod play;
pub mod post;

use std::path::Path;

use anyhow::{Context, Result};

use qstories::service::{HttpStoryService, StoryService};
use qstories::{logging, Config, StoryFeed};

/// Load configuration and start file logging.
///
/// Logging problems only produce a warning; the command still runs.
pub fn setup() -> Result<Config> {
    let config = Config::load().context("Failed to load configuration")?;
    if let Err(e) = logging::init(&config.log) {
        eprintln!("warning: logging disabled: {:#}", e);
    }
    Ok(config)
}

/// Read the feed from `file`, or fetch it from the story API.
pub fn load_feed(file: Option<&Path>, config: &Config) -> Result<StoryFeed> {
    match file {
        Some(path) => Ok(StoryFeed::load(path)?),
        None => {
            let service = HttpStoryService::new(&config.api);
            service.get_all().context("Failed to fetch stories")
        }
    }
}
