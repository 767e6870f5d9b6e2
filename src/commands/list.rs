//! `qstories list`

use anyhow::Result;

use qstories::cli::FeedArgs;
use qstories::tui::current_theme;
use qstories::StoryGroup;

/// Print every story group with its story and unviewed counts.
#[cfg(not(tarpaulin_include))]
pub fn handle_list(args: &FeedArgs) -> Result<()> {
    let config = super::setup()?;
    let feed = super::load_feed(args.file.as_deref(), &config)?;
    let theme = current_theme();

    if feed.is_empty() {
        println!("{}", theme.secondary_text("No stories."));
        return Ok(());
    }
    for (index, group) in feed.groups.iter().enumerate() {
        let line = format_group_line(index, group);
        if group.has_unviewed() {
            println!("{}", theme.accent_text(&line));
        } else {
            println!("{}", theme.secondary_text(&line));
        }
    }
    Ok(())
}

/// One listing line, e.g. `  0  @amina  2 stories (1 unviewed)`.
fn format_group_line(index: usize, group: &StoryGroup) -> String {
    let count = group.stories.len();
    let noun = if count == 1 { "story" } else { "stories" };
    let unviewed = group.unviewed_count();
    if unviewed > 0 {
        format!(
            "{:>3}  @{}  {} {} ({} unviewed)",
            index, group.user.username, count, noun, unviewed
        )
    } else {
        format!("{:>3}  @{}  {} {}", index, group.user.username, count, noun)
    }
}
