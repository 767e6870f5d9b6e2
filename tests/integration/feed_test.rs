//! Feed loading from files

use qstories::story::StoryError;
use qstories::{Media, StoryFeed, StoryId};

use crate::helpers::fixture;

#[test]
fn paginated_feed_loads_and_drops_empty_groups() {
    let feed = StoryFeed::load(fixture("feed.json")).expect("Should load fixture");

    let users: Vec<&str> = feed
        .groups
        .iter()
        .map(|g| g.user.username.as_str())
        .collect();
    assert_eq!(users, vec!["amina", "chebet"]);
}

#[test]
fn mixed_id_types_and_media_are_parsed() {
    let feed = StoryFeed::load(fixture("feed.json")).unwrap();
    let amina = &feed.groups[0];
    let chebet = &feed.groups[1];

    assert_eq!(amina.stories[0].id, StoryId::from(11));
    assert_eq!(chebet.stories[0].id, StoryId::from("c-1"));

    assert!(matches!(
        &amina.stories[0].media,
        Media::Text { background_color: Some(c) } if c == "#1E3A8A"
    ));
    assert!(matches!(
        chebet.stories[0].media,
        Media::Video { duration_secs: Some(d), .. } if d == 12.5
    ));
    // Empty URL means no media to show.
    assert!(matches!(chebet.stories[1].media, Media::Image { url: None }));
}

#[test]
fn unviewed_bookkeeping_matches_fixture() {
    let feed = StoryFeed::load(fixture("feed.json")).unwrap();
    assert_eq!(feed.groups[0].first_unviewed(), 1);
    assert_eq!(feed.groups[1].unviewed_count(), 1);
    assert_eq!(feed.first_unviewed_group(), 0);

    let viewed = StoryFeed::load(fixture("viewed.json")).unwrap();
    assert!(!viewed.groups[0].has_unviewed());
    assert_eq!(viewed.first_unviewed_group(), 0);
}

#[test]
fn created_at_fills_missing_time_ago() {
    let feed = StoryFeed::load(fixture("feed.json")).unwrap();
    // 2024 timestamp is days old by any test run.
    assert!(feed.groups[1].stories[0].time_ago.ends_with('d'));
}

#[test]
fn missing_file_reports_path() {
    let err = StoryFeed::load("/nonexistent/feed.json").unwrap_err();
    assert!(matches!(err, StoryError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/feed.json"));
}
