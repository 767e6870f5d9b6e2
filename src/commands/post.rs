//! `qstories post`

use anyhow::{bail, Context, Result};

use qstories::cli::PostArgs;
use qstories::service::{HttpStoryService, NewStory, StoryService};
use qstories::tui::current_theme;
use qstories::tui::theme::parse_hex_color;

/// Publish a text story.
#[cfg(not(tarpaulin_include))]
pub fn handle_post(args: &PostArgs) -> Result<()> {
    let config = super::setup()?;
    let story = build_story(args)?;
    let service = HttpStoryService::new(&config.api);
    let created = service
        .create(&story)
        .context("Failed to publish story")?;
    tracing::info!(id = %created.id, "Published story");
    println!(
        "{}",
        current_theme().accent_text(&format!("Published story {}", created.id))
    );
    Ok(())
}

/// Validate arguments into a request body.
fn build_story(args: &PostArgs) -> Result<NewStory> {
    let caption = args.caption.trim();
    if caption.is_empty() {
        bail!("Caption cannot be empty");
    }
    if let Some(color) = &args.background {
        if parse_hex_color(color).is_none() {
            bail!("Invalid background color '{}': expected #RRGGBB", color);
        }
    }
    Ok(NewStory::text(caption, args.background.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(caption: &str, background: Option<&str>) -> PostArgs {
        PostArgs {
            caption: caption.to_string(),
            background: background.map(str::to_string),
        }
    }

    #[test]
    fn trims_caption() {
        let story = build_story(&args("  hello  ", Some("#112233"))).unwrap();
        assert_eq!(story.caption, "hello");
        assert_eq!(story.background_color.as_deref(), Some("#112233"));
    }

    #[test]
    fn rejects_blank_caption() {
        assert!(build_story(&args("   ", None)).is_err());
    }

    #[test]
    fn rejects_bad_color() {
        let err = build_story(&args("hi", Some("blue"))).unwrap_err();
        assert!(err.to_string().contains("blue"));
    }
}
