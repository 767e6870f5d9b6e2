//! `qstories play`

use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Result};

use qstories::cli::PlayArgs;
use qstories::service::{DetachedViewTracker, HttpStoryService, NullViewTracker};
use qstories::tui::{current_theme, ViewerApp};
use qstories::{StoriesViewer, StoryFeed, Timing, ViewTracker};

/// Open the story viewer on the requested (or first unviewed) group.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(args: &PlayArgs) -> Result<()> {
    let config = super::setup()?;
    let feed = super::load_feed(args.feed.file.as_deref(), &config)?;
    if feed.is_empty() {
        println!("{}", current_theme().secondary_text("No stories to show."));
        return Ok(());
    }
    let start = resolve_user(&feed, args.user.as_deref())?;

    let tracker: Arc<dyn ViewTracker> = if args.offline {
        Arc::new(NullViewTracker)
    } else {
        let service = Arc::new(HttpStoryService::new(&config.api));
        Arc::new(DetachedViewTracker::new(service))
    };

    let mut viewer = StoriesViewer::new(feed, Timing::from(&config.playback), tracker);
    viewer.open(start, Instant::now())?;
    tracing::info!(group = start, offline = args.offline, "Opening story viewer");

    ViewerApp::new(viewer, &config.playback).run()
}

/// Pick the group to open: by username, by position, or the first unviewed.
fn resolve_user(feed: &StoryFeed, user: Option<&str>) -> Result<usize> {
    let Some(user) = user else {
        return Ok(feed.first_unviewed_group());
    };
    let name = user.trim_start_matches('@');
    if let Some(index) = feed
        .groups
        .iter()
        .position(|g| g.user.username.eq_ignore_ascii_case(name))
    {
        return Ok(index);
    }
    match user.parse::<usize>() {
        Ok(index) if index < feed.len() => Ok(index),
        _ => bail!("No stories from '{}'", user),
    }
}
