//! End-to-end playback through the public engine and viewer API

use std::sync::Arc;
use std::time::{Duration, Instant};

use qstories::service::NullViewTracker;
use qstories::{
    MediaCommand, StoriesViewer, StoryEngine, StoryFeed, StoryGroup, StoryId, StoryItem, TapZone,
    Timing, Transition, ViewerEvent,
};

use crate::helpers::{fixture, recording_tracker};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Two stories: an unviewed text story, then an already viewed image.
fn scenario_items() -> Vec<StoryItem> {
    vec![
        StoryItem::text("id1", "hello"),
        StoryItem::image("id2", "https://cdn.example.org/2.jpg").viewed(),
    ]
}

#[test]
fn timed_group_plays_through_and_hands_off_once() {
    let t0 = Instant::now();
    let (tracker, seen) = recording_tracker();
    let mut engine = StoryEngine::new(scenario_items(), 0, Timing::default(), tracker, t0).unwrap();

    // Entering the unviewed first story reports it.
    assert_eq!(*seen.lock().unwrap(), vec![StoryId::from("id1")]);

    assert_eq!(engine.poll(t0 + ms(2500)), Transition::Continue);
    assert_eq!(engine.state().progress, 50.0);

    assert_eq!(engine.poll(t0 + ms(5000)), Transition::Advanced);
    assert_eq!(engine.state().current_index, 1);
    assert_eq!(engine.state().progress, 0.0);

    // The viewed image is not reported again.
    assert_eq!(seen.lock().unwrap().len(), 1);

    assert_eq!(engine.poll(t0 + ms(10_000)), Transition::NextUser);
    assert_eq!(engine.state().progress, 100.0);
    assert_eq!(engine.poll(t0 + ms(20_000)), Transition::Continue);
}

#[test]
fn hold_freezes_progress_until_release() {
    let t0 = Instant::now();
    let mut engine = StoryEngine::new(
        scenario_items(),
        0,
        Timing::default(),
        Arc::new(NullViewTracker),
        t0,
    )
    .unwrap();

    engine.poll(t0 + ms(1000));
    assert_eq!(engine.state().progress, 20.0);

    assert_eq!(engine.press(), None);
    engine.poll(t0 + ms(4000));
    assert_eq!(engine.state().progress, 20.0);

    assert_eq!(engine.release(t0 + ms(4000)), None);
    engine.poll(t0 + ms(5000));
    assert_eq!(engine.state().progress, 40.0);
}

#[test]
fn video_story_follows_player_events() {
    let t0 = Instant::now();
    let items = vec![
        StoryItem::video("v", "https://cdn.example.org/v.mp4", Some(8.0)),
        StoryItem::text("t", "after"),
    ];
    let mut engine =
        StoryEngine::new(items, 0, Timing::default(), Arc::new(NullViewTracker), t0).unwrap();

    assert_eq!(engine.next_deadline(), None);
    engine.on_time_update(2.0, 8.0);
    assert_eq!(engine.state().progress, 25.0);
    engine.on_time_update(1.0, 0.0);
    assert_eq!(engine.state().progress, 25.0);

    assert_eq!(engine.press(), Some(MediaCommand::Pause));
    assert_eq!(engine.release(t0), Some(MediaCommand::Play));

    assert_eq!(engine.on_ended(t0 + ms(8000)), Transition::Advanced);
    assert_eq!(engine.state().current_index, 1);
    assert!(engine.next_deadline().is_some());
}

#[test]
fn initial_index_is_clamped() {
    let engine = StoryEngine::new(
        scenario_items(),
        9,
        Timing::default(),
        Arc::new(NullViewTracker),
        Instant::now(),
    )
    .unwrap();
    assert_eq!(engine.state().current_index, 1);
}

#[test]
fn viewer_walks_fixture_feed_across_users() {
    let t0 = Instant::now();
    let feed = StoryFeed::load(fixture("feed.json")).unwrap();
    let (tracker, seen) = recording_tracker();
    let mut viewer = StoriesViewer::new(feed, Timing::default(), tracker);

    // amina's first story is already viewed.
    viewer.open(0, t0).unwrap();
    assert_eq!(viewer.engine().unwrap().state().current_index, 1);

    assert_eq!(viewer.tap(TapZone::Right, t0), ViewerEvent::GroupChanged);

    // chebet's first story is viewed, so the group opens on the second.
    assert_eq!(viewer.current_group().unwrap().user.username, "chebet");
    assert_eq!(viewer.engine().unwrap().state().current_index, 1);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![StoryId::from(12), StoryId::from("c-2")]
    );

    assert_eq!(viewer.next_user(t0), ViewerEvent::Closed);
    assert!(!viewer.is_open());
}

#[test]
fn viewer_closes_after_last_story_times_out() {
    let t0 = Instant::now();
    let feed = StoryFeed::new(vec![StoryGroup::new("solo", vec![StoryItem::text(1, "x")])]);
    let mut viewer = StoriesViewer::new(feed, Timing::new(ms(1000), ms(100)), Arc::new(NullViewTracker));
    viewer.open(0, t0).unwrap();

    assert_eq!(viewer.poll(t0 + ms(900)), ViewerEvent::Continue);
    assert_eq!(viewer.poll(t0 + ms(1000)), ViewerEvent::Closed);
}

#[test]
fn long_hold_at_the_end_resumes_without_skipping() {
    let t0 = Instant::now();
    let feed = StoryFeed::new(vec![StoryGroup::new(
        "amina",
        vec![StoryItem::text(1, "a"), StoryItem::text(2, "b")],
    )]);
    let mut viewer = StoriesViewer::new(feed, Timing::default(), Arc::new(NullViewTracker));
    viewer.open(0, t0).unwrap();

    assert_eq!(viewer.poll(t0 + ms(4950)), ViewerEvent::Continue);
    assert_eq!(viewer.press(), None);

    // Held far longer than the story lasts.
    let resumed = t0 + ms(120_000);
    assert_eq!(viewer.poll(resumed), ViewerEvent::Continue);
    assert_eq!(viewer.engine().unwrap().state().current_index, 0);
    assert_eq!(viewer.release(resumed), None);

    let mut changes = 0;
    for step in 0..=40 {
        let event = viewer.poll(resumed + ms(step * 10));
        if event == ViewerEvent::StoryChanged {
            changes += 1;
        }
        let state = viewer.engine().unwrap().state();
        assert!(state.progress <= 100.0, "progress {}", state.progress);
    }
    assert_eq!(changes, 1);
    let state = viewer.engine().unwrap().state();
    assert_eq!(state.current_index, 1);
    assert!(state.progress < 10.0);
}

#[test]
fn uneven_timing_hands_off_on_schedule() {
    let t0 = Instant::now();
    let feed = StoryFeed::new(vec![StoryGroup::new(
        "amina",
        vec![StoryItem::text(1, "a"), StoryItem::text(2, "b")],
    )]);
    let timing = Timing::new(ms(1000), ms(30));
    let mut viewer = StoriesViewer::new(feed, timing, Arc::new(NullViewTracker));
    viewer.open(0, t0).unwrap();

    assert_eq!(viewer.poll(t0 + ms(989)), ViewerEvent::Continue);
    assert_eq!(viewer.poll(t0 + ms(990)), ViewerEvent::StoryChanged);
    assert_eq!(viewer.poll(t0 + ms(1000)), ViewerEvent::Continue);
    assert_eq!(viewer.engine().unwrap().state().current_index, 1);
}
